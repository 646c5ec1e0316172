//! Pool API operations

use crate::bigip::traits::uri_name;
use crate::bigip::{BigipClient, BigipResource, Pool, StatsBag};
use crate::config::api;
use crate::error::Result;

/// API path of a pool
pub(crate) fn pool_path(pool_uri_name: &str) -> String {
    format!("{}/{}/{}", api::LTM_BASE, api::POOLS, pool_uri_name)
}

impl BigipClient {
    /// Get all pools on the device
    pub async fn get_pools(&self) -> Result<Vec<Pool>> {
        let path = format!("{}/{}", api::LTM_BASE, api::POOLS);
        self.fetch_collection::<Pool>(&path, "pools").await
    }

    /// Get a pool by partition and name
    pub async fn get_pool(&self, partition: &str, name: &str) -> Result<Option<Pool>> {
        let path = pool_path(&uri_name(partition, name));
        self.fetch_resource_by_path::<Pool>(&path, &format!("pool '/{}/{}'", partition, name))
            .await
    }

    /// Get live statistics of a pool
    pub async fn get_pool_stats(&self, pool: &Pool) -> Result<StatsBag> {
        let path = format!("{}/{}", pool_path(&pool.uri_name()), api::STATS);
        self.fetch_stats(&path, &format!("stats for pool '{}'", pool.full_path()))
            .await
    }
}
