pub mod shared {
    pub mod core {
        pub mod envelope;
        pub mod errors;
    }
    pub mod infrastructure {
        pub mod error_translator;
    }
}

pub mod modules {
    pub mod employees {
        pub mod core {
            pub mod entities;
        }
        pub mod use_cases {
            pub mod get_employee_by_id {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
                pub mod view;
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod employee_repository;
                pub mod employee_repository_in_memory;
            }
        }
    }
    pub mod scheduled {
        pub mod count_to_ten;
    }
}

pub mod shell;
