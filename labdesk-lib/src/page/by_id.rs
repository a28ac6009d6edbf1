//! Resolving operator-entered identifiers

use super::Entity;
use super::EntityBackend;
use crate::error::Error;
use crate::model::EntityId;

/// Outcome of looking up a record by an entered identifier.
#[derive(Debug)]
pub enum Resolution<E> {
    Found(E),
    NotFound,
    Failed(Error),
}

/// Parses an entered identifier. Surrounding whitespace is ignored.
pub fn parse_id(input: &str) -> Option<EntityId> {
    input.trim().parse().ok()
}

/// Looks up the record an operator asked for.
///
/// Input that is not an integer resolves as not found without a request.
pub async fn resolve<E, B>(backend: &B, input: &str) -> Resolution<E>
where
    E: Entity,
    B: EntityBackend<E> + ?Sized,
{
    let Some(id) = parse_id(input) else {
        log::debug!("{} id {input:?} is not numeric", E::NAME);
        return Resolution::NotFound;
    };

    match backend.get(id).await {
        Ok(row) => Resolution::Found(row),
        Err(e) if e.is_not_found() => Resolution::NotFound,
        Err(e) => Resolution::Failed(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42"), Some(42));
        assert_eq!(parse_id(" 7 "), Some(7));
        assert_eq!(parse_id("-3"), Some(-3));
        assert_eq!(parse_id("abc"), None);
        assert_eq!(parse_id("4.5"), None);
        assert_eq!(parse_id(""), None);
    }
}
