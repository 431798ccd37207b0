//! Option value objects and the gate that admits them into a request.

use super::kind::{FormType, OptionType, QueryType};
use crate::Result;
use crate::error::ValidationError;
use std::fmt;

type CheckFn = Box<dyn Fn() -> Result<()> + Send + Sync>;
type SetFn<P> = Box<dyn Fn(&mut P) -> Result<()> + Send + Sync>;

/// A deferred, validated instruction to write one parameter into a query
/// string or form body.
///
/// The kind is fixed at construction. `check` inspects the captured value
/// without side effects; `set` writes it. Operations never call `set` unless
/// every option passed the whitelist and its `check`.
pub struct ParamOption<T: OptionType> {
    kind: T,
    check: Option<CheckFn>,
    set: Option<SetFn<T::Params>>,
}

pub type QueryOption = ParamOption<QueryType>;
pub type FormOption = ParamOption<FormType>;

impl<T: OptionType> ParamOption<T> {
    /// An option with neither check nor setter. Applying it fails until a
    /// setter is attached with [`ParamOption::with_set`].
    pub fn new(kind: T) -> Self {
        Self {
            kind,
            check: None,
            set: None,
        }
    }

    pub fn with_check<F>(mut self, check: F) -> Self
    where
        F: Fn() -> Result<()> + Send + Sync + 'static,
    {
        self.check = Some(Box::new(check));
        self
    }

    pub fn with_set<F>(mut self, set: F) -> Self
    where
        F: Fn(&mut T::Params) -> Result<()> + Send + Sync + 'static,
    {
        self.set = Some(Box::new(set));
        self
    }

    pub fn kind(&self) -> T {
        self.kind
    }

    /// Whitelist membership only; the value is not inspected.
    pub fn validate(&self, allowed: &[T]) -> Result<()> {
        if allowed.contains(&self.kind) {
            Ok(())
        } else {
            Err(self.kind.invalid(allowed))
        }
    }

    /// Domain-rule check of the captured value. Options without a check
    /// always pass.
    pub fn check(&self) -> Result<()> {
        match &self.check {
            Some(check) => check(),
            None => Ok(()),
        }
    }

    pub fn set(&self, params: &mut T::Params) -> Result<()> {
        match &self.set {
            Some(set) => set(params),
            None => Err(ValidationError::new(format!(
                "option '{}' has no setter",
                self.kind
            ))
            .into()),
        }
    }
}

impl<T: OptionType> fmt::Debug for ParamOption<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParamOption")
            .field("kind", &self.kind)
            .field("check", &self.check.is_some())
            .field("set", &self.set.is_some())
            .finish()
    }
}

/// Admits `options` into `params` for an operation that accepts `allowed`.
///
/// Runs in three passes over the options in input order: whitelist
/// membership, then value checks, then setters. Each pass stops at the first
/// failure, and nothing is written unless the first two passes succeed.
pub fn apply_options<T: OptionType>(
    params: &mut T::Params,
    options: &[ParamOption<T>],
    allowed: &[T],
) -> Result<()> {
    for option in options {
        option.validate(allowed)?;
    }

    for option in options {
        option.check()?;
    }

    for option in options {
        option.set(params)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::params::{FormParams, QueryParams};
    use crate::error::BacklogError;

    fn failing_check(kind: QueryType) -> QueryOption {
        QueryOption::new(kind)
            .with_check(|| Err(ValidationError::new("check error").into()))
            .with_set(move |query: &mut QueryParams| {
                query.set(kind.to_string(), "unreachable");
                Ok(())
            })
    }

    fn writing(kind: QueryType, value: &'static str) -> QueryOption {
        QueryOption::new(kind).with_set(move |query: &mut QueryParams| {
            query.set(kind.to_string(), value);
            Ok(())
        })
    }

    #[test]
    fn test_option_success() {
        let option = QueryOption::new(QueryType::Key)
            .with_check(|| Ok(()))
            .with_set(|query: &mut QueryParams| {
                query.set("key", "success");
                Ok(())
            });

        let mut query = QueryParams::new();
        assert!(option.check().is_ok());
        assert!(option.set(&mut query).is_ok());
        assert_eq!(query.get("key"), "success");
    }

    #[test]
    fn test_option_without_check_passes() {
        let option = writing(QueryType::Key, "no check");
        assert!(option.check().is_ok());

        let mut query = QueryParams::new();
        option.set(&mut query).expect("set should succeed");
        assert_eq!(query.get("key"), "no check");
    }

    #[test]
    fn test_option_without_setter_is_validation_error() {
        let option = FormOption::new(FormType::Key).with_check(|| Ok(()));
        let mut form = FormParams::new();

        assert!(option.check().is_ok());
        let err = option.set(&mut form).unwrap_err();
        assert!(matches!(err, BacklogError::Validation(_)));
        assert!(form.is_empty());
    }

    #[test]
    fn test_validate_rejects_kind_outside_whitelist() {
        let option = writing(QueryType::Key, "x");
        assert!(option.validate(&[QueryType::Key]).is_ok());

        let err = option
            .validate(&[QueryType::Count, QueryType::Order])
            .unwrap_err();
        match err {
            BacklogError::InvalidQueryOption(e) => {
                assert_eq!(e.invalid, QueryType::Key);
                assert_eq!(e.allowed, vec![QueryType::Count, QueryType::Order]);
            }
            other => panic!("Expected InvalidQueryOption, got {:?}", other),
        }
    }

    #[test]
    fn test_whitelist_checked_before_value() {
        // The option would fail its own check, yet the whitelist error wins.
        let options = vec![failing_check(QueryType::Keyword)];
        let mut query = QueryParams::new();

        let err = apply_options(&mut query, &options, &[QueryType::Count]).unwrap_err();
        assert!(err.is_invalid_option());
        assert!(query.is_empty());
    }

    #[test]
    fn test_whitelist_failure_anywhere_blocks_all_writes() {
        let options = vec![
            writing(QueryType::Count, "10"),
            writing(QueryType::Keyword, "later"),
        ];
        let mut query = QueryParams::new();

        let err = apply_options(&mut query, &options, &[QueryType::Count]).unwrap_err();
        assert!(err.is_invalid_option());
        assert!(query.is_empty());
    }

    #[test]
    fn test_check_failure_blocks_all_writes() {
        let options = vec![
            writing(QueryType::Count, "10"),
            failing_check(QueryType::Order),
        ];
        let mut query = QueryParams::new();

        let err = apply_options(&mut query, &options, &[QueryType::Count, QueryType::Order])
            .unwrap_err();
        match err {
            BacklogError::Validation(e) => assert_eq!(e.message, "check error"),
            other => panic!("Expected Validation, got {:?}", other),
        }
        assert!(query.is_empty());
    }

    #[test]
    fn test_setters_run_in_input_order() {
        let options = vec![
            QueryOption::new(QueryType::ActivityTypeIds).with_set(|query: &mut QueryParams| {
                query.add("activityTypeId[]", "3");
                Ok(())
            }),
            QueryOption::new(QueryType::ActivityTypeIds).with_set(|query: &mut QueryParams| {
                query.add("activityTypeId[]", "1");
                Ok(())
            }),
        ];
        let mut query = QueryParams::new();

        apply_options(&mut query, &options, &[QueryType::ActivityTypeIds])
            .expect("options should apply");
        assert_eq!(query.get_all("activityTypeId[]"), ["3", "1"]);
    }

    #[test]
    fn test_empty_options_are_a_no_op() {
        let mut form = FormParams::new();
        apply_options::<FormType>(&mut form, &[], &[]).expect("nothing to apply");
        assert!(form.is_empty());
    }

    #[test]
    fn test_debug_hides_closures() {
        let option = writing(QueryType::All, "true");
        let rendered = format!("{:?}", option);
        assert!(rendered.contains("All"));
        assert!(rendered.contains("set: true"));
        assert!(rendered.contains("check: false"));
    }
}
