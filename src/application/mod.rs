// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! This module contains the application layer of the Clean Architecture:
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer uses application layer services
//!
//! # Example
//!
//! ```ignore
//! use iced_vitrine::application::port::PageSource;
//! use iced_vitrine::infrastructure::http::HttpPageSource;
//!
//! // Infrastructure implements the port trait
//! let source: Arc<dyn PageSource> = Arc::new(HttpPageSource::new(endpoint, timeout)?);
//! ```

pub mod port;
