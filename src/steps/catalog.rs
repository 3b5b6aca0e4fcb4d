use crate::context::PipelineContext;
use crate::models::CatalogServiceResult;

/// Reports which catalog service the pipeline should use.
pub async fn get_catalog_service(ctx: &PipelineContext) -> CatalogServiceResult {
    CatalogServiceResult {
        catalog_service: ctx.config.catalog_service.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[tokio::test]
    async fn returns_configured_service() {
        let ctx = PipelineContext::new(Config {
            catalog_service: Some("shopware".into()),
            ..Default::default()
        });
        let res = get_catalog_service(&ctx).await;
        assert_eq!(res.catalog_service.as_deref(), Some("shopware"));
    }

    #[tokio::test]
    async fn missing_service_is_none() {
        let ctx = PipelineContext::new(Config::default());
        assert_eq!(get_catalog_service(&ctx).await.catalog_service, None);
    }
}
