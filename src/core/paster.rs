// debugpaste - core/paster.rs
//
// Paste session: the ordered set of named files that will form one paste.
//
// Invariants:
//   - The application tag is validated against `Application` at construction
//     and kept exactly as the caller spelled it.
//   - File names are unique ignoring case; a rejected add leaves the session
//     untouched.
//   - Files keep insertion order, which is also the order on the wire.

use crate::core::model::{Application, PasteFile};
use crate::core::payload;
use crate::util::error::ArgumentError;

/// A single paste under construction.
#[derive(Debug, Clone)]
pub struct Paster {
    application: Application,
    tag: String,
    files: Vec<PasteFile>,
}

impl Paster {
    /// Start a paste for `tag`, which must name one of the known applications.
    pub fn new(tag: &str) -> Result<Self, ArgumentError> {
        let application = Application::from_tag(tag)?;
        Ok(Self {
            application,
            tag: tag.to_string(),
            files: Vec::new(),
        })
    }

    /// Start a paste for a known application using its canonical tag.
    pub fn for_application(application: Application) -> Self {
        Self {
            application,
            tag: application.tag().to_string(),
            files: Vec::new(),
        }
    }

    pub fn application(&self) -> Application {
        self.application
    }

    /// The tag as supplied at construction.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Append `file`, rejecting names already present (ignoring case).
    pub fn add_file(&mut self, file: PasteFile) -> Result<(), ArgumentError> {
        let wanted = file.name().to_lowercase();
        if self
            .files
            .iter()
            .any(|existing| existing.name().to_lowercase() == wanted)
        {
            return Err(ArgumentError::DuplicateFile {
                name: file.name().to_string(),
            });
        }
        tracing::debug!(
            name = file.name(),
            bytes = file.content().len(),
            "Added file to paste"
        );
        self.files.push(file);
        Ok(())
    }

    /// Files in insertion order. The slice is read-only; the session can only
    /// grow through `add_file`.
    pub fn files(&self) -> &[PasteFile] {
        &self.files
    }

    /// Wire payload for the current file set.
    pub fn to_payload(&self) -> String {
        payload::encode(&self.tag, &self.files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, content: &str) -> PasteFile {
        PasteFile::new(name, content).unwrap()
    }

    #[test]
    fn test_new_accepts_known_tags_and_keeps_spelling() {
        let paster = Paster::new("PlotSquared").unwrap();
        assert_eq!(paster.application(), Application::PlotSquared);
        assert_eq!(paster.tag(), "PlotSquared");
        assert!(paster.files().is_empty());
    }

    #[test]
    fn test_new_rejects_unknown_tag() {
        assert!(matches!(
            Paster::new("bukkit"),
            Err(ArgumentError::UnknownApplication { .. })
        ));
        assert_eq!(Paster::new("").unwrap_err(), ArgumentError::EmptyApplication);
    }

    #[test]
    fn test_files_keep_insertion_order() {
        let mut paster = Paster::for_application(Application::Kvantum);
        paster.add_file(file("b", "2")).unwrap();
        paster.add_file(file("a", "1")).unwrap();
        paster.add_file(file("c", "3")).unwrap();
        let names: Vec<_> = paster.files().iter().map(|f| f.name()).collect();
        assert_eq!(names, ["b", "a", "c"]);
    }

    #[test]
    fn test_duplicate_name_differing_in_case_is_rejected() {
        let mut paster = Paster::for_application(Application::Kvantum);
        paster.add_file(file("latest.log", "one")).unwrap();
        let err = paster.add_file(file("Latest.LOG", "two")).unwrap_err();
        assert_eq!(
            err,
            ArgumentError::DuplicateFile {
                name: "Latest.LOG".to_string()
            }
        );
        assert_eq!(paster.files().len(), 1);
        assert_eq!(paster.files()[0].content(), "one");
    }
}
