//! Common traits for BIG-IP resources

/// Common trait for partition-scoped resources (pools, members)
pub trait BigipResource {
    /// Get the resource name
    fn name(&self) -> &str;

    /// Get the administrative partition
    fn partition(&self) -> &str;

    /// Full path as shown by tmsh, e.g. `/Common/web-pool`
    fn full_path(&self) -> String {
        format!("/{}/{}", self.partition(), self.name())
    }

    /// URL path segment addressing this resource, e.g. `~Common~web-pool`
    fn uri_name(&self) -> String {
        uri_name(self.partition(), self.name())
    }
}

/// URL path segment for a resource in a partition
pub fn uri_name(partition: &str, name: &str) -> String {
    format!(
        "~{}~{}",
        urlencoding::encode(partition),
        urlencoding::encode(name)
    )
}
