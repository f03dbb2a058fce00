use serde::{Deserialize, Serialize};
use crate::core::library::{LibraryError, LibraryResult};

// Server declares the user-management operations a server implementation
// must provide; no concrete implementor ships with the crate.
pub(crate) trait Server {
    // rejects the user when capacity is reached or the name is invalid
    fn add_user(&mut self, username: &str) -> LibraryResult<()>;
    // fails with NotFound when no such user is registered
    fn remove_user(&mut self, username: &str) -> LibraryResult<()>;
}

// ServerProfile holds the validated base state shared by Server implementors.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub(crate) struct ServerProfile {
    pub name: String,
    pub capacity: i64,
}

impl ServerProfile {
    pub fn new(name: &str, capacity: i64) -> LibraryResult<Self> {
        if capacity <= 0 {
            return Err(LibraryError::validation(
                format!("capacity must be positive, got {}", capacity).as_str(), None));
        }
        Ok(Self {
            name: name.to_string(),
            capacity,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::core::library::{LibraryError, LibraryResult};
    use crate::servers::domain::{Server, ServerProfile};

    struct ChatServer {
        profile: ServerProfile,
        users: Vec<String>,
    }

    impl Server for ChatServer {
        fn add_user(&mut self, username: &str) -> LibraryResult<()> {
            if username.is_empty() {
                return Err(LibraryError::validation("username cannot be empty", None));
            }
            if self.users.len() as i64 >= self.profile.capacity {
                return Err(LibraryError::validation("server is at capacity", None));
            }
            self.users.push(username.to_string());
            Ok(())
        }

        fn remove_user(&mut self, username: &str) -> LibraryResult<()> {
            let index = self.users.iter().position(|user| user == username)
                .ok_or_else(|| LibraryError::not_found(
                    format!("user {} does not exist", username).as_str()))?;
            self.users.remove(index);
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_should_build_server_profile() {
        let profile = ServerProfile::new("TestServer", 100).expect("should build profile");
        assert_eq!("TestServer", profile.name.as_str());
        assert_eq!(100, profile.capacity);
    }

    #[tokio::test]
    async fn test_should_reject_non_positive_capacity() {
        assert!(ServerProfile::new("MyServer", 0).is_err());
        assert!(ServerProfile::new("MyServer", -1).is_err());
    }

    #[tokio::test]
    async fn test_should_add_and_remove_users() {
        let mut server = ChatServer {
            profile: ServerProfile::new("MyServer", 2).expect("should build profile"),
            users: vec![],
        };
        server.add_user("user1").expect("should add user");
        server.add_user("user2").expect("should add user");
        assert!(server.add_user("user3").is_err());
        server.remove_user("user1").expect("should remove user");
        assert!(server.remove_user("unknown").is_err());
    }
}
