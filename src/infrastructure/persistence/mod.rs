//! Link repository implementations.
//!
//! Concrete implementations of the domain repository trait.
//!
//! # Repositories
//!
//! - [`MemoryLinkRepository`] - in-process map; default backend and the
//!   conforming implementation used by tests
//! - [`RedisLinkRepository`] - Redis backend for multi-process deployments

pub mod memory_link_repository;
pub mod redis_link_repository;

pub use memory_link_repository::MemoryLinkRepository;
pub use redis_link_repository::RedisLinkRepository;
