//! Application services for user registration and lookup.

mod registry;

pub use registry::{
    RegisterUserRequest, RegistrationOutcome, UserRegistryService, UserRegistryServiceError,
    UserRegistryServiceResult,
};
