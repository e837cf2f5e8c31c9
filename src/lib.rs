pub mod shared {
    pub mod core {
        pub mod errors;
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod command_bus;
        pub mod event_store;
        pub mod serializer;
    }
}

pub mod modules {
    pub mod faculty {
        pub mod core {
            pub mod decide_error;
            pub mod events;
            pub mod evolve;
            pub mod tags;
        }
        pub mod use_cases {
            pub mod create_course {
                pub mod command;
                pub mod handler;
            }
            pub mod enroll_student {
                pub mod command;
                pub mod handler;
            }
            pub mod rename_course {
                pub mod command;
                pub mod handler;
            }
            pub mod subscribe_student {
                pub mod command;
                pub mod handler;
            }
            pub mod change_course_capacity {
                pub mod command;
                pub mod handler;
            }
        }
    }
}

pub mod shell;
