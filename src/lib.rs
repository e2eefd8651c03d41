pub mod clients;
pub mod config;
pub mod decision;
pub mod domain {
    pub mod auth;
    pub mod bank;
    pub mod context;
    pub mod fraud;
    pub mod payment;
    pub mod ticket;
}
pub mod error;
pub mod http {
    pub mod handlers {
        pub mod auth;
        pub mod fraud;
        pub mod frontend;
        pub mod payments;
        pub mod tickets;
    }
    pub mod middleware {
        pub mod correlation;
    }
    pub mod routes;
}
pub mod service {
    pub mod auth_service;
    pub mod fraud_service;
    pub mod frontend;
    pub mod payment_service;
    pub mod session;
    pub mod ticket_poller;
}
pub mod telemetry;
