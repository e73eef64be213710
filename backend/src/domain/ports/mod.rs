//! Domain ports and supporting types for the hexagonal boundary.

mod seed_command;
mod seed_gateway;

#[cfg(test)]
pub use seed_command::MockSeedCommand;
pub use seed_command::SeedCommand;
#[cfg(test)]
pub use seed_gateway::MockSeedGateway;
pub use seed_gateway::{EntityKind, SeedGateway, SeedGatewayError};
