use serde::{Deserialize, Serialize};
use crate::core::library::{LibraryError, LibraryResult};

// Vehicle declares the operations a vehicle implementation must provide;
// no concrete implementor ships with the crate.
pub(crate) trait Vehicle {
    // raises speed by delta, rejecting a non-positive delta
    fn accelerate(&mut self, delta: f64) -> LibraryResult<()>;
    fn brake(&mut self);
}

// VehicleProfile holds the validated base state shared by Vehicle implementors.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub(crate) struct VehicleProfile {
    pub brand: String,
    pub speed: f64,
    pub seats: i64,
}

impl VehicleProfile {
    pub fn new(brand: &str, speed: f64, seats: i64) -> LibraryResult<Self> {
        if speed <= 0.0 {
            return Err(LibraryError::validation(
                format!("speed must be positive, got {}", speed).as_str(), None));
        }
        if seats <= 0 {
            return Err(LibraryError::validation(
                format!("seats must be positive, got {}", seats).as_str(), None));
        }
        Ok(Self {
            brand: brand.to_string(),
            speed,
            seats,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::core::library::{LibraryError, LibraryResult};
    use crate::vehicles::domain::{Vehicle, VehicleProfile};

    struct Car {
        profile: VehicleProfile,
    }

    impl Vehicle for Car {
        fn accelerate(&mut self, delta: f64) -> LibraryResult<()> {
            if delta <= 0.0 {
                return Err(LibraryError::validation("delta must be positive", None));
            }
            self.profile.speed += delta;
            Ok(())
        }

        fn brake(&mut self) {
            self.profile.speed = 0.0;
        }
    }

    #[tokio::test]
    async fn test_should_build_vehicle_profile() {
        let profile = VehicleProfile::new("Audi", 100.0, 4).expect("should build profile");
        assert_eq!("Audi", profile.brand.as_str());
        assert_eq!(4, profile.seats);
    }

    #[tokio::test]
    async fn test_should_reject_non_positive_speed() {
        assert!(VehicleProfile::new("Tesla", -10.0, 4).is_err());
        assert!(VehicleProfile::new("Tesla", 0.0, 4).is_err());
    }

    #[tokio::test]
    async fn test_should_reject_non_positive_seats() {
        assert!(VehicleProfile::new("BMW", 150.0, 0).is_err());
    }

    #[tokio::test]
    async fn test_should_accelerate_and_brake() {
        let mut car = Car {
            profile: VehicleProfile::new("Audi", 100.0, 4).expect("should build profile"),
        };
        car.accelerate(20.0).expect("should accelerate");
        assert_eq!(120.0, car.profile.speed);
        assert!(car.accelerate(-1.0).is_err());
        car.brake();
        assert_eq!(0.0, car.profile.speed);
    }
}
