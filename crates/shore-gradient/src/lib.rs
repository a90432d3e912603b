//! Shoreline gradient computation: intersection testing against candidate
//! transects, deterministic trend coloring, and gradient assembly.

pub mod builder;
pub mod colormap;
pub mod config;
pub mod intersect;

pub use builder::{build_gradient, Gradient, Intersection};
pub use colormap::{trend_color, Color};
pub use config::GradientConfig;
pub use intersect::IntersectionEngine;
