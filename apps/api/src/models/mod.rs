pub mod profile;
pub mod representative;

pub use profile::{
    AssignedDistricts, CommunicationTone, DraftingProfile, PrimaryTone, RegulationPreference,
    UserProfile,
};
pub use representative::{Chamber, Representative, ZipRecord};
