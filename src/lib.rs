pub mod errors;

pub mod service {
    pub mod config_service;
    pub mod directory;
    pub mod writer;
    pub mod xml;
    pub mod traits {
        pub mod i_service;
    }
}

pub mod config {
    pub mod config;
    pub mod ports;
}

pub mod facade {
    pub mod extraction_facade;
    pub mod traits {
        pub mod i_extraction;
    }
}

pub mod models {
    pub mod extraction;
    pub mod listing;
}

pub mod action {
    pub mod cli;
    pub mod interactive;
}

pub mod utils {
    pub mod utils;
}
