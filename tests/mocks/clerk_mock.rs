use wasm_bindgen::prelude::*;

/// This module provides a mock of the identity provider's browser SDK so the
/// token bridge can be exercised without loading the real script.

#[wasm_bindgen(inline_js = r#"
export function setup_clerk_mock(token) {
    window.__clerkTemplates = [];
    window.Clerk = {
        session: {
            getToken: function(options) {
                console.log("[MOCK CLERK] getToken called with:", JSON.stringify(options));
                window.__clerkTemplates.push(options && options.template);
                return Promise.resolve(token);
            }
        }
    };
    console.log("[MOCK] Clerk mock setup complete");
    return true;
}

export function setup_signed_out_clerk_mock() {
    window.__clerkTemplates = [];
    window.Clerk = { session: null };
    return true;
}

export function remove_clerk_mock() {
    delete window.Clerk;
    delete window.__clerkTemplates;
}

export function requested_templates() {
    return (window.__clerkTemplates || []).join(",");
}
"#)]
extern "C" {
    /// Injects `window.Clerk` with a session that always yields `token`
    pub fn setup_clerk_mock(token: &str) -> bool;

    /// Injects `window.Clerk` without an active session
    pub fn setup_signed_out_clerk_mock() -> bool;

    pub fn remove_clerk_mock();

    /// Comma-separated templates passed to `getToken`, in call order
    pub fn requested_templates() -> String;
}
