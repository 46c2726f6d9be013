//! Filter normalization and query-string encoding
//!
//! Every catalog request starts as an ordered list of named filter values.
//! [`normalize`] applies the wire rules (the `id` rename, keyword
//! unwrapping, the unset-value drop) and [`encode`] serializes the
//! survivors onto the endpoint path. List values become repeated
//! `key=value` pairs.
//!
//! The drop rule mirrors the service's notion of "unset": empty strings,
//! empty lists and zero are all treated as not provided, while the boolean
//! `false` is a meaningful filter value and survives. A `skip` or `limit`
//! of zero is therefore never sent.

use url::form_urlencoded;

use crate::types::{DeviceSort, MaintainerSort, ReleaseSort, ReleaseType};

/// One value or several, for filters the service accepts repeated.
///
/// Most string filters on the listing endpoints take either a single value
/// or a list; `OneOrMany` lets callers pass both without ceremony:
///
/// ```
/// use orangefox_api::OneOrMany;
///
/// let one: OneOrMany<String> = "lavender".into();
/// let many: OneOrMany<String> = ["lavender", "raphael"].into();
/// assert_eq!(one, OneOrMany::One("lavender".to_string()));
/// assert_eq!(many.into_vec().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    /// Flatten into a plain vector.
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::One(value) => vec![value],
            OneOrMany::Many(values) => values,
        }
    }
}

impl<T> From<T> for OneOrMany<T> {
    fn from(value: T) -> Self {
        OneOrMany::One(value)
    }
}

impl<T> From<Vec<T>> for OneOrMany<T> {
    fn from(values: Vec<T>) -> Self {
        OneOrMany::Many(values)
    }
}

impl<T, const N: usize> From<[T; N]> for OneOrMany<T> {
    fn from(values: [T; N]) -> Self {
        OneOrMany::Many(values.into())
    }
}

impl From<&str> for OneOrMany<String> {
    fn from(value: &str) -> Self {
        OneOrMany::One(value.to_string())
    }
}

impl From<Vec<&str>> for OneOrMany<String> {
    fn from(values: Vec<&str>) -> Self {
        OneOrMany::Many(values.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for OneOrMany<String> {
    fn from(values: [&str; N]) -> Self {
        OneOrMany::Many(values.iter().map(|value| value.to_string()).collect())
    }
}

/// A single filter value prior to encoding.
///
/// Keyword variants hold the wire strings of the closed enumerations in
/// [`crate::types`]; [`normalize`] unwraps them into plain strings.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum FilterValue {
    Str(String),
    StrList(Vec<String>),
    Bool(bool),
    UInt(u64),
    Keyword(&'static str),
    KeywordList(Vec<&'static str>),
}

impl FilterValue {
    /// Whether the value counts as "set". Booleans always do, `false`
    /// included; zero, empty strings and empty lists do not.
    fn is_set(&self) -> bool {
        match self {
            FilterValue::Str(value) => !value.is_empty(),
            FilterValue::StrList(values) => !values.is_empty(),
            FilterValue::Bool(_) => true,
            FilterValue::UInt(value) => *value != 0,
            FilterValue::Keyword(_) => true,
            FilterValue::KeywordList(keywords) => !keywords.is_empty(),
        }
    }

    /// Substitute enumeration members with their underlying strings.
    fn unwrap_keywords(self) -> FilterValue {
        match self {
            FilterValue::Keyword(keyword) => FilterValue::Str(keyword.to_string()),
            FilterValue::KeywordList(keywords) => {
                FilterValue::StrList(keywords.into_iter().map(str::to_string).collect())
            }
            value => value,
        }
    }
}

/// Ordered filter entries for one request. Insertion order is wire order.
pub(crate) type FilterSet = Vec<(&'static str, FilterValue)>;

/// Conversion from caller-facing argument types into [`FilterValue`].
pub(crate) trait ToFilterValue {
    fn to_value(&self) -> FilterValue;
}

impl ToFilterValue for String {
    fn to_value(&self) -> FilterValue {
        FilterValue::Str(self.clone())
    }
}

impl ToFilterValue for bool {
    fn to_value(&self) -> FilterValue {
        FilterValue::Bool(*self)
    }
}

impl ToFilterValue for u64 {
    fn to_value(&self) -> FilterValue {
        FilterValue::UInt(*self)
    }
}

impl ToFilterValue for OneOrMany<String> {
    fn to_value(&self) -> FilterValue {
        match self {
            OneOrMany::One(value) => FilterValue::Str(value.clone()),
            OneOrMany::Many(values) => FilterValue::StrList(values.clone()),
        }
    }
}

impl ToFilterValue for OneOrMany<ReleaseType> {
    fn to_value(&self) -> FilterValue {
        match self {
            OneOrMany::One(value) => FilterValue::Keyword(value.as_str()),
            OneOrMany::Many(values) => {
                FilterValue::KeywordList(values.iter().map(|value| value.as_str()).collect())
            }
        }
    }
}

impl ToFilterValue for ReleaseType {
    fn to_value(&self) -> FilterValue {
        FilterValue::Keyword(self.as_str())
    }
}

impl ToFilterValue for DeviceSort {
    fn to_value(&self) -> FilterValue {
        FilterValue::Keyword(self.as_str())
    }
}

impl ToFilterValue for MaintainerSort {
    fn to_value(&self) -> FilterValue {
        FilterValue::Keyword(self.as_str())
    }
}

impl ToFilterValue for ReleaseSort {
    fn to_value(&self) -> FilterValue {
        FilterValue::Keyword(self.as_str())
    }
}

/// Append `value` to `filters` under `name` when the field is set.
pub(crate) fn push_filter<V: ToFilterValue>(
    filters: &mut FilterSet,
    name: &'static str,
    value: &Option<V>,
) {
    if let Some(value) = value {
        filters.push((name, value.to_value()));
    }
}

/// Apply the wire rules to a filter set.
///
/// Renames `id` to `_id` (the only rename the service knows), unwraps
/// enumeration keywords into their strings, and drops every entry that
/// does not count as set. Entry order is preserved.
pub(crate) fn normalize(filters: FilterSet) -> FilterSet {
    filters
        .into_iter()
        .filter(|(_, value)| value.is_set())
        .map(|(name, value)| {
            let name = if name == "id" { "_id" } else { name };
            (name, value.unwrap_keywords())
        })
        .collect()
}

/// Serialize a normalized filter set onto `path`.
///
/// The query string follows `application/x-www-form-urlencoded` rules,
/// with booleans capitalized (`True`/`False`) the way the service expects
/// them. An empty set still yields a trailing `?`:
///
/// ```text
/// /releases/?
/// /devices/?codename=lavender&codename=raphael&supported=True
/// ```
pub(crate) fn encode(path: &str, filters: &FilterSet) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());

    for (name, value) in filters {
        match value {
            FilterValue::Str(value) => {
                query.append_pair(name, value);
            }
            FilterValue::StrList(values) => {
                for value in values {
                    query.append_pair(name, value);
                }
            }
            FilterValue::Bool(value) => {
                query.append_pair(name, if *value { "True" } else { "False" });
            }
            FilterValue::UInt(value) => {
                query.append_pair(name, &value.to_string());
            }
            FilterValue::Keyword(keyword) => {
                query.append_pair(name, keyword);
            }
            FilterValue::KeywordList(keywords) => {
                for keyword in keywords {
                    query.append_pair(name, keyword);
                }
            }
        }
    }

    format!("{}?{}", path, query.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_renames_id_only() {
        let filters = vec![
            ("id", FilterValue::Str("abc".to_string())),
            ("device_id", FilterValue::Str("def".to_string())),
        ];

        let normalized = normalize(filters);
        assert_eq!(
            normalized,
            vec![
                ("_id", FilterValue::Str("abc".to_string())),
                ("device_id", FilterValue::Str("def".to_string())),
            ]
        );
    }

    #[test]
    fn test_normalize_drops_unset_values() {
        let filters = vec![
            ("codename", FilterValue::Str(String::new())),
            ("oem_name", FilterValue::StrList(Vec::new())),
            ("skip", FilterValue::UInt(0)),
            ("release_type", FilterValue::KeywordList(Vec::new())),
        ];

        assert!(normalize(filters).is_empty());
    }

    #[test]
    fn test_normalize_keeps_false() {
        let filters = vec![("supported", FilterValue::Bool(false))];

        let normalized = normalize(filters);
        assert_eq!(normalized, vec![("supported", FilterValue::Bool(false))]);
    }

    #[test]
    fn test_normalize_unwraps_keywords() {
        let filters = vec![
            ("sort", FilterValue::Keyword("date_asc")),
            ("release_type", FilterValue::KeywordList(vec!["stable", "beta"])),
        ];

        let normalized = normalize(filters);
        assert_eq!(
            normalized,
            vec![
                ("sort", FilterValue::Str("date_asc".to_string())),
                (
                    "release_type",
                    FilterValue::StrList(vec!["stable".to_string(), "beta".to_string()])
                ),
            ]
        );
    }

    #[test]
    fn test_normalize_preserves_order() {
        let filters = vec![
            ("codename", FilterValue::Str("lavender".to_string())),
            ("skip", FilterValue::UInt(0)),
            ("limit", FilterValue::UInt(5)),
        ];

        let names: Vec<&str> = normalize(filters).into_iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["codename", "limit"]);
    }

    #[test]
    fn test_encode_empty_set_keeps_bare_question_mark() {
        assert_eq!(encode("/releases/", &FilterSet::new()), "/releases/?");
    }

    #[test]
    fn test_encode_single_sort_pair() {
        let filters = vec![("sort", FilterValue::StrList(vec!["date_asc".to_string()]))];

        let encoded = encode("/devices/", &filters);
        assert_eq!(encoded, "/devices/?sort=date_asc");
        assert_eq!(encoded.matches("sort=date_asc").count(), 1);
    }

    #[test]
    fn test_encode_repeats_list_keys() {
        let filters = vec![(
            "codename",
            FilterValue::StrList(vec!["lavender".to_string(), "raphael".to_string()]),
        )];

        assert_eq!(
            encode("/devices/", &filters),
            "/devices/?codename=lavender&codename=raphael"
        );
    }

    #[test]
    fn test_encode_capitalizes_booleans() {
        let filters = vec![
            ("supported", FilterValue::Bool(true)),
            ("ab_device", FilterValue::Bool(false)),
        ];

        assert_eq!(
            encode("/devices/", &filters),
            "/devices/?supported=True&ab_device=False"
        );
    }

    #[test]
    fn test_encode_escapes_spaces_as_plus() {
        let filters = vec![("model_name", FilterValue::Str("Redmi Note 7".to_string()))];

        assert_eq!(
            encode("/devices/", &filters),
            "/devices/?model_name=Redmi+Note+7"
        );
    }

    #[test]
    fn test_encode_round_trips_through_form_decoding() {
        let filters = vec![
            (
                "codename",
                FilterValue::StrList(vec!["lavender".to_string(), "raphael".to_string()]),
            ),
            ("supported", FilterValue::Bool(true)),
            ("skip", FilterValue::UInt(20)),
        ];

        let encoded = encode("/devices/", &filters);
        let (path, query) = encoded.split_once('?').unwrap();
        assert_eq!(path, "/devices/");

        let pairs: Vec<(String, String)> = form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("codename".to_string(), "lavender".to_string()),
                ("codename".to_string(), "raphael".to_string()),
                ("supported".to_string(), "True".to_string()),
                ("skip".to_string(), "20".to_string()),
            ]
        );
    }

    #[test]
    fn test_one_or_many_conversions() {
        let one: OneOrMany<String> = "lavender".into();
        assert_eq!(one, OneOrMany::One("lavender".to_string()));

        let many: OneOrMany<String> = vec!["a", "b"].into();
        assert_eq!(
            many,
            OneOrMany::Many(vec!["a".to_string(), "b".to_string()])
        );

        let from_array: OneOrMany<String> = ["x", "y"].into();
        assert_eq!(from_array.into_vec(), vec!["x".to_string(), "y".to_string()]);

        let typed: OneOrMany<crate::types::ReleaseType> = crate::types::ReleaseType::Beta.into();
        assert_eq!(typed, OneOrMany::One(crate::types::ReleaseType::Beta));
    }

    #[test]
    fn test_push_filter_skips_unset_fields() {
        let mut filters = FilterSet::new();
        push_filter(&mut filters, "codename", &Some("lavender".to_string()));
        push_filter::<String>(&mut filters, "version", &None);

        assert_eq!(
            filters,
            vec![("codename", FilterValue::Str("lavender".to_string()))]
        );
    }
}
