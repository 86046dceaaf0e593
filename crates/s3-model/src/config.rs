//! Bucket inventory configuration.
//!
//! An inventory configuration tells the service to produce periodic listings
//! of a bucket's objects. The record tree mirrors the XML document the
//! service stores: a configuration owns a destination, an optional filter,
//! a schedule, and the set of extra columns to emit.

use std::fmt;

use crate::types::{
    InventoryFormat, InventoryFrequency, InventoryIncludedObjectVersions, InventoryOptionalField,
};
use crate::util::FieldList;

/// A bucket inventory configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct InventoryConfiguration {
    /// Where the inventory reports are published.
    pub destination: Option<InventoryDestination>,
    /// Whether the configuration produces reports.
    pub is_enabled: Option<bool>,
    /// Restricts the inventory to objects matching a prefix.
    pub filter: Option<InventoryFilter>,
    /// Identifier of the configuration within the bucket.
    pub id: Option<String>,
    /// Which object versions the inventory covers.
    pub included_object_versions: Option<InventoryIncludedObjectVersions>,
    /// Extra columns included in each report.
    pub optional_fields: Option<Vec<InventoryOptionalField>>,
    /// How often reports are produced.
    pub schedule: Option<InventorySchedule>,
}

impl InventoryConfiguration {
    /// Set where reports are published.
    #[must_use]
    pub fn with_destination(mut self, destination: InventoryDestination) -> Self {
        self.destination = Some(destination);
        self
    }

    /// Enable or disable report production.
    #[must_use]
    pub fn with_is_enabled(mut self, is_enabled: bool) -> Self {
        self.is_enabled = Some(is_enabled);
        self
    }

    /// Restrict the inventory to objects matching a filter.
    #[must_use]
    pub fn with_filter(mut self, filter: InventoryFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Set the configuration identifier.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Choose which object versions the inventory covers.
    #[must_use]
    pub fn with_included_object_versions(
        mut self,
        versions: InventoryIncludedObjectVersions,
    ) -> Self {
        self.included_object_versions = Some(versions);
        self
    }

    /// Append one extra column to the report, allocating the list on first
    /// use.
    #[must_use]
    pub fn with_optional_field(mut self, field: InventoryOptionalField) -> Self {
        self.optional_fields.get_or_insert_with(Vec::new).push(field);
        self
    }

    /// Replace the full set of extra columns.
    #[must_use]
    pub fn with_optional_fields(
        mut self,
        fields: impl IntoIterator<Item = InventoryOptionalField>,
    ) -> Self {
        self.optional_fields = Some(fields.into_iter().collect());
        self
    }

    /// Set the report schedule.
    #[must_use]
    pub fn with_schedule(mut self, schedule: InventorySchedule) -> Self {
        self.schedule = Some(schedule);
        self
    }
}

impl fmt::Display for InventoryConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        FieldList::new(f)
            .opt("Destination", self.destination.as_ref())
            .opt("IsEnabled", self.is_enabled.as_ref())
            .opt("Filter", self.filter.as_ref())
            .opt("Id", self.id.as_ref())
            .opt(
                "IncludedObjectVersions",
                self.included_object_versions.as_ref(),
            )
            .list("OptionalFields", self.optional_fields.as_deref())
            .opt("Schedule", self.schedule.as_ref())
            .finish()
    }
}

/// Where inventory reports are published.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct InventoryDestination {
    /// The bucket the reports land in.
    pub s3_bucket_destination: Option<InventoryS3BucketDestination>,
}

impl InventoryDestination {
    /// Set the destination bucket details.
    #[must_use]
    pub fn with_s3_bucket_destination(mut self, destination: InventoryS3BucketDestination) -> Self {
        self.s3_bucket_destination = Some(destination);
        self
    }
}

impl fmt::Display for InventoryDestination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        FieldList::new(f)
            .opt("S3BucketDestination", self.s3_bucket_destination.as_ref())
            .finish()
    }
}

/// Bucket, account, format, and prefix for published reports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct InventoryS3BucketDestination {
    /// Account expected to own the destination bucket.
    pub account_id: Option<String>,
    /// ARN of the bucket the reports land in.
    pub bucket: Option<String>,
    /// Output format of the reports.
    pub format: Option<InventoryFormat>,
    /// Key prefix prepended to every report.
    pub prefix: Option<String>,
}

impl InventoryS3BucketDestination {
    /// Set the account expected to own the destination bucket.
    #[must_use]
    pub fn with_account_id(mut self, account_id: impl Into<String>) -> Self {
        self.account_id = Some(account_id.into());
        self
    }

    /// Set the destination bucket ARN.
    #[must_use]
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = Some(bucket.into());
        self
    }

    /// Set the report output format.
    #[must_use]
    pub fn with_format(mut self, format: InventoryFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Set the key prefix for published reports.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }
}

impl fmt::Display for InventoryS3BucketDestination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        FieldList::new(f)
            .opt("AccountId", self.account_id.as_ref())
            .opt("Bucket", self.bucket.as_ref())
            .opt("Format", self.format.as_ref())
            .opt("Prefix", self.prefix.as_ref())
            .finish()
    }
}

/// Prefix filter limiting which objects an inventory covers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct InventoryFilter {
    /// Only objects whose keys start with this prefix are listed.
    pub prefix: Option<String>,
}

impl InventoryFilter {
    /// Set the key prefix to filter on.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }
}

impl fmt::Display for InventoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        FieldList::new(f).opt("Prefix", self.prefix.as_ref()).finish()
    }
}

/// How often inventory reports are produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct InventorySchedule {
    /// Report cadence.
    pub frequency: Option<InventoryFrequency>,
}

impl InventorySchedule {
    /// Set the report cadence.
    #[must_use]
    pub fn with_frequency(mut self, frequency: InventoryFrequency) -> Self {
        self.frequency = Some(frequency);
        self
    }
}

impl fmt::Display for InventorySchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        FieldList::new(f)
            .opt("Frequency", self.frequency.as_ref())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::hash::{DefaultHasher, Hash, Hasher as _};

    use super::*;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    fn weekly_csv() -> InventoryConfiguration {
        InventoryConfiguration::default()
            .with_id("weekly-audit")
            .with_is_enabled(true)
            .with_included_object_versions(InventoryIncludedObjectVersions::Current)
            .with_destination(InventoryDestination::default().with_s3_bucket_destination(
                InventoryS3BucketDestination::default()
                    .with_account_id("123456789012")
                    .with_bucket("arn:aws:s3:::report-bucket")
                    .with_format(InventoryFormat::Csv)
                    .with_prefix("audits/"),
            ))
            .with_schedule(InventorySchedule::default().with_frequency(InventoryFrequency::Weekly))
    }

    #[test]
    fn test_should_build_nested_configuration() {
        let config = weekly_csv();
        assert_eq!(config.id.as_deref(), Some("weekly-audit"));
        assert_eq!(config.is_enabled, Some(true));
        let dest = config
            .destination
            .as_ref()
            .and_then(|d| d.s3_bucket_destination.as_ref())
            .unwrap();
        assert_eq!(dest.format, Some(InventoryFormat::Csv));
        assert_eq!(dest.prefix.as_deref(), Some("audits/"));
        assert_eq!(
            config.schedule.as_ref().and_then(|s| s.frequency.as_ref()),
            Some(&InventoryFrequency::Weekly)
        );
    }

    #[test]
    fn test_should_append_optional_fields_one_at_a_time() {
        let config = InventoryConfiguration::default()
            .with_optional_field(InventoryOptionalField::Size)
            .with_optional_field(InventoryOptionalField::Etag);
        assert_eq!(
            config.optional_fields,
            Some(vec![InventoryOptionalField::Size, InventoryOptionalField::Etag])
        );
    }

    #[test]
    fn test_should_replace_optional_fields_wholesale() {
        let config = InventoryConfiguration::default()
            .with_optional_field(InventoryOptionalField::Size)
            .with_optional_fields([
                InventoryOptionalField::StorageClass,
                InventoryOptionalField::ReplicationStatus,
            ]);
        assert_eq!(
            config.optional_fields,
            Some(vec![
                InventoryOptionalField::StorageClass,
                InventoryOptionalField::ReplicationStatus,
            ])
        );
    }

    #[test]
    fn test_should_distinguish_unset_optional_fields_from_empty_list() {
        let unset = InventoryConfiguration::default();
        let empty = InventoryConfiguration::default().with_optional_fields([]);
        assert_eq!(unset.optional_fields, None);
        assert_eq!(empty.optional_fields, Some(Vec::new()));
        assert_ne!(unset, empty);
        assert_eq!(unset.to_string(), "{}");
        assert_eq!(empty.to_string(), "{OptionalFields: []}");
    }

    #[test]
    fn test_should_render_nested_records() {
        let config = InventoryConfiguration::default()
            .with_id("daily")
            .with_filter(InventoryFilter::default().with_prefix("logs/"))
            .with_optional_fields([InventoryOptionalField::Size, InventoryOptionalField::Etag])
            .with_schedule(InventorySchedule::default().with_frequency(InventoryFrequency::Daily));
        assert_eq!(
            config.to_string(),
            "{Filter: {Prefix: logs/}, Id: daily, \
             OptionalFields: [Size, ETag], Schedule: {Frequency: Daily}}"
        );
    }

    #[test]
    fn test_should_hide_unset_optional_fields_from_display() {
        let config = InventoryConfiguration::default().with_id("daily");
        assert_eq!(config.to_string(), "{Id: daily}");
    }

    #[test]
    fn test_should_support_hash_sets() {
        let mut seen = HashSet::new();
        assert!(seen.insert(weekly_csv()));
        assert!(!seen.insert(weekly_csv()));
        assert!(seen.insert(weekly_csv().with_is_enabled(false)));
    }

    #[test]
    fn test_should_hash_equal_configurations_identically() {
        assert_eq!(hash_of(&weekly_csv()), hash_of(&weekly_csv()));
    }
}
