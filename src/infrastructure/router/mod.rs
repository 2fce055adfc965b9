//! Router implementations

mod memory;

pub use memory::MemoryRouter;
