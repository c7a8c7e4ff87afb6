// Composition root for the tasks service.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the snapshot store and the task store.
// - Wire the store into the use case handlers and expose the HTTP router.

pub mod config;
pub mod http;
pub mod state;
