use crate::schema::KeySchema;
use crate::store::ConfigMapStore;
use async_trait::async_trait;
use profile_core::config::EtcdConfig;
use profile_core::configmap::{ConfigMap, ConfigMapRef};
use profile_core::error::{ProfileError, Result};
use std::time::Duration;
use tracing::info;

/// etcd-backed ConfigMap store. Objects are stored as JSON.
pub struct EtcdStore {
    client: etcd_client::Client,
    schema: KeySchema,
}

fn store_err(e: etcd_client::Error) -> ProfileError {
    ProfileError::Store(e.to_string())
}

impl EtcdStore {
    /// Connect to etcd.
    pub async fn connect(config: &EtcdConfig) -> Result<Self> {
        let options = etcd_client::ConnectOptions::new()
            .with_timeout(Duration::from_secs(config.timeout_secs))
            .with_connect_timeout(Duration::from_secs(config.timeout_secs));
        let client = etcd_client::Client::connect(&config.endpoints, Some(options))
            .await
            .map_err(store_err)?;
        info!("Connected to etcd at {:?}", config.endpoints);
        Ok(Self {
            client,
            schema: KeySchema::new(&config.prefix),
        })
    }

    /// Put a ConfigMap into etcd.
    pub async fn put(&self, configmap: &ConfigMap) -> Result<()> {
        let key = self
            .schema
            .configmap_key(&configmap.metadata.namespace, &configmap.metadata.name);
        let value = serde_json::to_vec(configmap)?;
        self.client.clone().put(key, value, None).await.map_err(store_err)?;
        Ok(())
    }

    /// Delete a ConfigMap from etcd.
    pub async fn delete(&self, namespace: &str, name: &str) -> Result<()> {
        let key = self.schema.configmap_key(namespace, name);
        self.client.clone().delete(key, None).await.map_err(store_err)?;
        Ok(())
    }

    pub fn schema(&self) -> &KeySchema {
        &self.schema
    }
}

#[async_trait]
impl ConfigMapStore for EtcdStore {
    async fn get(&self, target: &ConfigMapRef) -> Result<ConfigMap> {
        let key = self.schema.configmap_key(&target.namespace, &target.name);
        // The client is a cheap handle over a shared channel.
        let resp = self
            .client
            .clone()
            .get(key.as_bytes(), None)
            .await
            .map_err(store_err)?;
        let kv = resp
            .kvs()
            .first()
            .ok_or_else(|| ProfileError::NotFound(target.to_string()))?;
        Ok(serde_json::from_slice(kv.value())?)
    }

    fn backend(&self) -> &'static str {
        "etcd"
    }
}
