//! Connect-then-announce session state machine.
//!
//! A [`Session`](structs::session::Session) owns exactly one handshake cycle
//! at a time. It is driven by [`SessionInput`](enums::session_input::SessionInput)
//! values and answers each one with a list of
//! [`SessionEffect`](enums::session_effect::SessionEffect)s for the caller to
//! carry out: open or close the socket, send a datagram, arm or cancel a
//! timer, emit an event. The session itself never performs I/O and never
//! reads a clock, so every transition can be exercised with plain values.
//!
//! # States
//!
//! ```text
//!            start                 connect ok               announce ok
//! Idle ───────────────> AwaitingConnect ──────> AwaitingAnnounce ──────> Waiting
//!  ^                        │                         │                    │
//!  └──── error / retries exhausted ───────────────────┘      interval / start
//!                                                                          │
//!                                            AwaitingConnect <─────────────┘
//! ```
//!
//! `Destroyed` is reachable from every state and is terminal.

/// Errors, effects, inputs, states and caller-visible events.
pub mod enums;

/// Implementation blocks for the session and the default id source.
pub mod impls;

/// Session and event payload definitions.
pub mod structs;

/// Source of transaction IDs.
pub mod traits;
