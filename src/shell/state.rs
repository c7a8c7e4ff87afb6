use crate::modules::tasks::adapters::outbound::task_store::TaskStore;
use crate::modules::tasks::core::resolve::UpdateRules;
use crate::modules::tasks::use_cases::create_task::handler::CreateTaskHandler;
use crate::modules::tasks::use_cases::delete_task::handler::DeleteTaskHandler;
use crate::modules::tasks::use_cases::update_task::handler::UpdateTaskHandler;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<TaskStore>,
    pub create_handler: Arc<CreateTaskHandler>,
    pub update_handler: Arc<UpdateTaskHandler>,
    pub delete_handler: Arc<DeleteTaskHandler>,
}

impl AppState {
    pub fn new(store: Arc<TaskStore>, rules: UpdateRules) -> Self {
        Self {
            create_handler: Arc::new(CreateTaskHandler::new(store.clone())),
            update_handler: Arc::new(UpdateTaskHandler::new(store.clone(), rules)),
            delete_handler: Arc::new(DeleteTaskHandler::new(store.clone())),
            store,
        }
    }
}
