//! Mandala content API - integration test support.
//!
//! Re-exports the workspace crates under one `mandala_test::` root so the
//! integration tests build routers the same way the server binary does.

pub mod component {
    pub use mandala_core::{config, constants, error};

    pub mod db {
        pub use mandala_db::db::*;
        pub use mandala_db::store;
    }

    pub mod model {
        pub use mandala_db::model::*;
    }

    pub mod service {
        pub use mandala_service::*;
    }
}

pub mod app {
    pub use mandala_app::config::ConfigHandler;
    pub use mandala_app::store_handler::StoreHandler;

    pub mod api {
        pub use mandala_app::app::api::*;
    }
}
