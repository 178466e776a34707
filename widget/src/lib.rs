//! # Animals widget
//!
//! Client-side search widget for the animals API: the user opens a
//! prompt, types a name, and the first matching record is appended to
//! a session-local card list.
//!
//! All interaction logic lives in a pure state machine
//! ([`state::SearchWidget`]) that consumes [`state::Message`]s and
//! emits [`state::Command`]s. The transport sits behind the
//! [`api::AnimalsApi`] trait so the machine can be tested without a
//! network or a rendering environment.
pub mod api;
pub mod card;
pub mod runner;
pub mod state;
pub mod view;
