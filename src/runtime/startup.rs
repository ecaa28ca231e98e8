use crate::audio::RodioDevice;
use crate::config::Settings;
use crate::library::FolderReader;
use crate::organizer::Organizer;

/// Wire the filesystem source and the rodio device into a fresh organizer.
pub fn build_organizer(settings: &Settings) -> Organizer {
    let source = FolderReader::from_settings(&settings.library);
    let device = RodioDevice::new();
    Organizer::new(Box::new(source), Box::new(device))
}
