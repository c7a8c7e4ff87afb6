pub mod shared {
    pub mod infrastructure {
        pub mod snapshot_store;
    }
}

pub mod modules {
    pub mod tasks {
        pub mod core {
            pub mod patch;
            pub mod resolve;
            pub mod seed;
            pub mod task;
            pub mod timestamp;
        }
        pub mod use_cases {
            pub mod list_tasks {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_task {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod create_task {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_task {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_task {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod task_store;
            }
        }
    }
}

pub mod shell;
