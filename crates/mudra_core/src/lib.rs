//! Core of the mudra hand tracking engine.
//!
//! Takes the 21-landmark hand skeletons an upstream pose estimator produces
//! and turns them into two independent outputs per hand: a ranked list of
//! learned symbol matches, and an aspect-correct visual crop for side-by-side
//! display.
//!
//! - [`common`] - the typed data model shared by every component.
//! - [`conversions`] - the pose canonicalization transform.
//! - [`symbols`] - the learned symbol library and similarity matching.
//! - [`display`] - ROI extraction, skeleton grid view, letterboxing.
//! - [`codec`] - validated ingestion of estimator wire payloads.
//! - [`engine`] - the façade owning the store and driving the per-frame flow.

pub mod codec;
pub mod common;
pub mod conversions;
pub mod display;
pub mod engine;
pub mod error;
pub mod schema;
pub mod symbols;
