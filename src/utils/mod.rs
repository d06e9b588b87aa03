pub mod dates;
pub mod leptos_owner;
pub mod panic_hook;
