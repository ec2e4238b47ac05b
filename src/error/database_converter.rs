use diesel::result::{DatabaseErrorKind, Error as DieselError};

use crate::error::AppError;

/// Converts Diesel database errors into structured `AppError` variants.
///
/// Postgres reports constraint violations with a `DETAIL: Key (col)=(val)`
/// line and a `table_column_suffix` constraint name; both are parsed here so
/// callers get entity/field/value triples instead of raw driver text.
pub struct DatabaseErrorConverter;

impl DatabaseErrorConverter {
    pub fn convert_diesel_error(error: DieselError, operation: &str) -> AppError {
        match error {
            DieselError::NotFound => AppError::NotFound {
                entity: "resource".to_string(),
                field: "id".to_string(),
                value: "unknown".to_string(),
            },
            DieselError::DatabaseError(kind, info) => {
                let message = info.message().to_string();
                let table = info.table_name().map(str::to_string);
                Self::convert_database_error(kind, &message, table.as_deref(), operation)
            }
            other => AppError::Database {
                operation: operation.to_string(),
                source: anyhow::Error::from(other),
            },
        }
    }

    fn convert_database_error(
        kind: DatabaseErrorKind,
        message: &str,
        table: Option<&str>,
        operation: &str,
    ) -> AppError {
        let entity = table.unwrap_or("resource").to_string();

        match kind {
            DatabaseErrorKind::UniqueViolation => {
                let (field, value) = Self::parse_key_detail(message)
                    .unwrap_or_else(|| ("unknown".to_string(), "unknown".to_string()));
                AppError::Duplicate {
                    entity,
                    field,
                    value,
                }
            }
            DatabaseErrorKind::ForeignKeyViolation => {
                let (field, value) = Self::parse_key_detail(message)
                    .unwrap_or_else(|| ("unknown".to_string(), "unknown".to_string()));
                AppError::Validation {
                    field,
                    reason: format!("Invalid reference from {entity} to value '{value}'"),
                }
            }
            DatabaseErrorKind::NotNullViolation => AppError::Validation {
                field: Self::parse_column(message).unwrap_or_else(|| "unknown".to_string()),
                reason: format!("Field is required for {entity}"),
            },
            DatabaseErrorKind::CheckViolation => AppError::Validation {
                field: entity,
                reason: message.to_string(),
            },
            _ => AppError::Database {
                operation: operation.to_string(),
                source: anyhow::Error::msg(format!("Database error: {message}")),
            },
        }
    }

    /// Extracts `(field, value)` from a Postgres `Key (field)=(value)` detail.
    fn parse_key_detail(message: &str) -> Option<(String, String)> {
        let rest = message.split("Key (").nth(1)?;
        let (fields, rest) = rest.split_once(")=(")?;
        let value = rest.split(')').next()?;
        Some((fields.to_string(), value.to_string()))
    }

    /// Extracts the quoted column name from a not-null violation message.
    fn parse_column(message: &str) -> Option<String> {
        let rest = message.split("column \"").nth(1)?;
        Some(rest.split('"').next()?.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    struct MockInfo {
        message: String,
        table: Option<String>,
    }

    impl diesel::result::DatabaseErrorInformation for MockInfo {
        fn message(&self) -> &str {
            &self.message
        }
        fn details(&self) -> Option<&str> {
            None
        }
        fn hint(&self) -> Option<&str> {
            None
        }
        fn table_name(&self) -> Option<&str> {
            self.table.as_deref()
        }
        fn column_name(&self) -> Option<&str> {
            None
        }
        fn constraint_name(&self) -> Option<&str> {
            None
        }
        fn statement_position(&self) -> Option<i32> {
            None
        }
    }

    fn db_error(kind: DatabaseErrorKind, message: &str, table: Option<&str>) -> DieselError {
        DieselError::DatabaseError(
            kind,
            Box::new(MockInfo {
                message: message.to_string(),
                table: table.map(str::to_string),
            }),
        )
    }

    #[test]
    fn not_found_maps_to_not_found_variant() {
        let result =
            DatabaseErrorConverter::convert_diesel_error(DieselError::NotFound, "find menu");
        assert!(matches!(result, AppError::NotFound { .. }));
    }

    #[test]
    fn order_items_unique_violation_maps_to_duplicate() {
        let error = db_error(
            DatabaseErrorKind::UniqueViolation,
            "duplicate key value violates unique constraint \"order_items_order_id_menu_id_idx\"\nDETAIL: Key (order_id, menu_id)=(5, 2) already exists.",
            Some("order_items"),
        );

        match DatabaseErrorConverter::convert_diesel_error(error, "insert order item") {
            AppError::Duplicate {
                entity,
                field,
                value,
            } => {
                assert_eq!(entity, "order_items");
                assert_eq!(field, "order_id, menu_id");
                assert_eq!(value, "5, 2");
            }
            other => panic!("expected Duplicate, got: {other:?}"),
        }
    }

    #[test]
    fn menu_item_fk_violation_maps_to_validation() {
        let error = db_error(
            DatabaseErrorKind::ForeignKeyViolation,
            "insert or update on table \"menu_items\" violates foreign key constraint \"menu_items_recipe_id_fkey\"\nDETAIL: Key (recipe_id)=(999) is not present in table \"recipes\".",
            Some("menu_items"),
        );

        match DatabaseErrorConverter::convert_diesel_error(error, "insert menu item") {
            AppError::Validation { field, reason } => {
                assert_eq!(field, "recipe_id");
                assert!(reason.contains("999"));
            }
            other => panic!("expected Validation, got: {other:?}"),
        }
    }

    #[test]
    fn not_null_violation_names_the_column() {
        let error = db_error(
            DatabaseErrorKind::NotNullViolation,
            "null value in column \"name\" violates not-null constraint",
            Some("menus"),
        );

        match DatabaseErrorConverter::convert_diesel_error(error, "insert menu") {
            AppError::Validation { field, reason } => {
                assert_eq!(field, "name");
                assert!(reason.contains("menus"));
            }
            other => panic!("expected Validation, got: {other:?}"),
        }
    }
}
