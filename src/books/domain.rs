use crate::core::library::{LibraryError, LibraryResult};

pub mod model;

// Readable declares the operations a reading-progress implementation must
// provide; no concrete implementor ships with the crate.
pub(crate) trait Readable {
    // consumes count pages, rejecting a non-positive count
    fn read_pages(&mut self, count: i64) -> LibraryResult<()>;
    // pages left unread
    fn remaining_pages(&self) -> i64;
}

// ReadingProfile holds the validated base state shared by Readable implementors.
#[derive(Debug, PartialEq, Clone)]
pub(crate) struct ReadingProfile {
    pub title: String,
    pub pages: i64,
}

impl ReadingProfile {
    pub fn new(title: &str, pages: i64) -> LibraryResult<Self> {
        if pages <= 0 {
            return Err(LibraryError::validation(
                format!("pages must be positive, got {}", pages).as_str(), None));
        }
        Ok(Self {
            title: title.to_string(),
            pages,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::{Readable, ReadingProfile};
    use crate::core::library::{LibraryError, LibraryResult};

    struct PaperBook {
        profile: ReadingProfile,
        read: i64,
    }

    impl Readable for PaperBook {
        fn read_pages(&mut self, count: i64) -> LibraryResult<()> {
            if count <= 0 {
                return Err(LibraryError::validation("count must be positive", None));
            }
            self.read = (self.read + count).min(self.profile.pages);
            Ok(())
        }

        fn remaining_pages(&self) -> i64 {
            self.profile.pages - self.read
        }
    }

    #[tokio::test]
    async fn test_should_build_reading_profile() {
        let profile = ReadingProfile::new("Python 101", 300).expect("should build profile");
        assert_eq!("Python 101", profile.title.as_str());
        assert_eq!(300, profile.pages);
    }

    #[tokio::test]
    async fn test_should_reject_non_positive_pages() {
        assert!(ReadingProfile::new("Some Title", 0).is_err());
        assert!(ReadingProfile::new("Some Title", -5).is_err());
    }

    #[tokio::test]
    async fn test_should_track_remaining_pages() {
        let mut book = PaperBook {
            profile: ReadingProfile::new("Learning Rust", 400).expect("should build profile"),
            read: 0,
        };
        book.read_pages(150).expect("should read pages");
        assert_eq!(250, book.remaining_pages());
        assert!(book.read_pages(0).is_err());
    }
}
