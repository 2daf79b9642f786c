//! Onboard Web
//!
//! Onboarding wizard and profile dashboard built with Leptos (WASM).
//!
//! # Architecture
//!
//! Client-side rendered (CSR) Leptos application. All state lives in the
//! browser: the wizard and theme preference come from the `onboard` crate and
//! persist through `localStorage`. There is no server.

use leptos::*;

mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
