//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态

use std::sync::Arc;

use crate::application::{
    // Command handlers
    CreateStatusCheckHandler,
    // Query handlers
    GetLatestDramasHandler, GetStreamLinkHandler, ListStatusChecksHandler, SearchDramasHandler,
    UpstreamCredentials,
    // Ports
    DramaGatewayPort, StatusCheckRepositoryPort, TokenProviderPort,
};
use crate::domain::drama::DeviceProfile;

/// 应用状态
///
/// 出站 HTTP 客户端和数据库连接池在启动时创建，由所有请求共享
pub struct AppState {
    // ========== Ports ==========
    pub token_provider: Arc<dyn TokenProviderPort>,
    pub drama_gateway: Arc<dyn DramaGatewayPort>,
    pub status_repo: Arc<dyn StatusCheckRepositoryPort>,

    // ========== Command Handlers ==========
    pub create_status_check_handler: CreateStatusCheckHandler,

    // ========== Query Handlers ==========
    pub latest_dramas_handler: GetLatestDramasHandler,
    pub search_dramas_handler: SearchDramasHandler,
    pub stream_link_handler: GetStreamLinkHandler,
    pub list_status_checks_handler: ListStatusChecksHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        token_provider: Arc<dyn TokenProviderPort>,
        drama_gateway: Arc<dyn DramaGatewayPort>,
        status_repo: Arc<dyn StatusCheckRepositoryPort>,
        device_profile: DeviceProfile,
    ) -> Self {
        let credentials = UpstreamCredentials::new(token_provider.clone(), device_profile);

        Self {
            // Ports
            token_provider,
            drama_gateway: drama_gateway.clone(),
            status_repo: status_repo.clone(),

            // Command handlers
            create_status_check_handler: CreateStatusCheckHandler::new(status_repo.clone()),

            // Query handlers
            latest_dramas_handler: GetLatestDramasHandler::new(
                credentials.clone(),
                drama_gateway.clone(),
            ),
            search_dramas_handler: SearchDramasHandler::new(
                credentials.clone(),
                drama_gateway.clone(),
            ),
            stream_link_handler: GetStreamLinkHandler::new(credentials, drama_gateway),
            list_status_checks_handler: ListStatusChecksHandler::new(status_repo),
        }
    }
}
