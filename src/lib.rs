pub mod shared {
    pub mod core {
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod event_store;
        pub mod intent_outbox;
    }
}

pub mod modules {
    pub mod access_control {
        pub mod authorizer;
        pub mod core {
            pub mod policy;
            pub mod scope;
        }
        pub mod adapters {
            pub mod outbound {
                pub mod directory;
                pub mod directory_in_memory;
            }
        }
    }

    pub mod time_tracking {
        pub mod core {
            pub mod decision;
            pub mod events;
            pub mod evolve;
            pub mod intents;
            pub mod projections;
            pub mod state;
            pub mod subject;
            pub mod validation;
        }
        pub mod application {
            pub mod control_streams;
            pub mod errors;
            pub mod projector;
        }
        pub mod use_cases {
            pub mod assign_control_record {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod change_status {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod get_control_record {
                pub mod handler;
                pub mod view;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod get_active_time {
                pub mod handler;
                pub mod view;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod start_timer {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod stop_timer {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod view;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod add_manual_time_entry {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod validate;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod update_manual_time_entry {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod validate;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod delete_manual_time_entry {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_manual_time_entries {
                pub mod handler;
                pub mod projection;
                pub mod queries_port;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_time_entries {
                pub mod handler;
                pub mod projection;
                pub mod queries_port;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod intent_outbox;
                pub mod projections;
                pub mod projections_in_memory;
            }
        }
    }
}

pub mod shell;
