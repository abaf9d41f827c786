use std::fmt;

/// Marker trait for a cached entity domain. `TAG` namespaces every key the
/// domain derives, so keys from two domains can never collide.
pub trait Domain: Send + Sync + 'static {
    const TAG: &'static str;
}

/// Cache key: domain tag plus the ordered scalar parameters of the request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    tag: &'static str,
    params: Vec<String>,
}

impl QueryKey {
    /// Key for a domain's whole collection (dictionaries, unpaged lists).
    pub fn all<D: Domain>() -> Self {
        Self {
            tag: D::TAG,
            params: Vec::new(),
        }
    }

    /// Key for one page of a domain's collection.
    pub fn page<D: Domain>(page: u32, limit: u32) -> Self {
        Self {
            tag: D::TAG,
            params: vec![page.to_string(), limit.to_string()],
        }
    }

    /// Key for a single record.
    pub fn item<D: Domain>(id: impl fmt::Display) -> Self {
        Self {
            tag: D::TAG,
            params: vec![id.to_string()],
        }
    }

    /// Appends an extra scalar parameter (search text, flags).
    pub fn with_param(mut self, param: impl fmt::Display) -> Self {
        self.params.push(param.to_string());
        self
    }

    pub fn tag(&self) -> &'static str {
        self.tag
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag)?;
        for param in &self.params {
            write!(f, ":{param}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Left;
    impl Domain for Left {
        const TAG: &'static str = "left";
    }

    struct Right;
    impl Domain for Right {
        const TAG: &'static str = "right";
    }

    #[test]
    fn test_same_shape_different_domains_differ() {
        assert_ne!(QueryKey::all::<Left>(), QueryKey::all::<Right>());
        assert_ne!(
            QueryKey::page::<Left>(1, 20),
            QueryKey::page::<Right>(1, 20)
        );
    }

    #[test]
    fn test_params_are_part_of_the_key() {
        assert_ne!(QueryKey::page::<Left>(1, 20), QueryKey::page::<Left>(2, 20));
        assert_ne!(QueryKey::page::<Left>(1, 20), QueryKey::page::<Left>(1, 50));
        assert_ne!(
            QueryKey::page::<Left>(1, 20),
            QueryKey::page::<Left>(1, 20).with_param("query")
        );
    }

    #[test]
    fn test_display_joins_tag_and_params() {
        assert_eq!(QueryKey::page::<Left>(3, 20).to_string(), "left:3:20");
        assert_eq!(QueryKey::all::<Right>().to_string(), "right");
    }
}
