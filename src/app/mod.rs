use std::{net::SocketAddr, sync::Arc};

use derive_more::Deref;
use tokio::net::TcpListener;
use tracing::info;

use crate::{config::AppConfig, model::ModelManager, templ_manager::TemplateManager, Result};

// ###################################
// ->  Structs
// ###################################
pub struct App {
    pub app_state: AppState,
    pub listener: TcpListener,
}

impl App {
    pub fn new(app_state: AppState, listener: TcpListener) -> Self {
        App {
            app_state,
            listener,
        }
    }

    /// Connects the database pool, runs the schema bootstrap and binds the
    /// listener.
    ///
    /// Bootstrap failure is fatal: refusing to start beats serving requests
    /// against a missing table.
    pub async fn build_from_config(config: AppConfig) -> Result<Self> {
        let mm = ModelManager::init(&config).await?;
        mm.bootstrap().await?;
        let tm = TemplateManager::init();

        let app_state = AppState::new(mm, tm);

        let addr = SocketAddr::from((config.net_config.host, config.net_config.app_port));
        let listener = TcpListener::bind(addr).await?;
        let addr = listener.local_addr()?;
        info!("{:<20} - {}", "Listening on:", addr);

        let app = App::new(app_state, listener);
        Ok(app)
    }
}

pub struct InternalState {
    pub database_mgr: ModelManager,
    pub templ_mgr: TemplateManager,
}

/// Application state containing all global data.
/// It implements `Deref` to easily access the fields on `InternalState`
/// Uses an `Arc` so it can be cloned around.
#[derive(Clone, Deref)]
pub struct AppState(Arc<InternalState>);

impl AppState {
    pub fn new(database_mgr: ModelManager, templ_mgr: TemplateManager) -> Self {
        AppState(Arc::new(InternalState {
            database_mgr,
            templ_mgr,
        }))
    }
}
