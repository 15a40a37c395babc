use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use common::sanitize::{clean, Sanitize};
use models::expense;

use crate::errors::ServiceError;
use crate::validation::{self, OwnerInput};

const NOT_FOUND: &str = "The expense doesn't exist";

/// Create and update payload. `date` accepts `YYYY-MM-DD` or `MM/DD/YYYY`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExpenseInput {
    pub user_id: Option<i64>,
    pub type_id: Option<i64>,
    pub amount: Option<Decimal>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseView {
    pub id: i32,
    pub user_id: i32,
    pub type_id: i32,
    pub amount: Decimal,
    pub name: String,
    pub description: String,
    pub date: NaiveDate,
}

impl From<expense::Model> for ExpenseView {
    fn from(m: expense::Model) -> Self {
        Self {
            id: m.id,
            user_id: m.user_id,
            type_id: m.type_id,
            amount: m.amount,
            name: m.name,
            description: m.description,
            date: m.date,
        }
    }
}

impl Sanitize for ExpenseView {
    fn sanitize(self) -> Self {
        Self { name: clean(&self.name), description: clean(&self.description), ..self }
    }
}

#[derive(Debug)]
struct ValidExpense {
    user_id: i32,
    type_id: i32,
    amount: Decimal,
    name: String,
    description: String,
    date: NaiveDate,
}

impl ExpenseInput {
    fn validate(self) -> Result<ValidExpense, ServiceError> {
        Ok(ValidExpense {
            user_id: validation::id("user_id", self.user_id)?,
            type_id: validation::id("type_id", self.type_id)?,
            amount: validation::amount("amount", self.amount)?,
            name: validation::text("name", self.name)?,
            description: validation::text("description", self.description)?,
            date: validation::date("date", self.date)?,
        })
    }
}

impl ValidExpense {
    fn apply(self, am: &mut expense::ActiveModel) {
        am.user_id = Set(self.user_id);
        am.type_id = Set(self.type_id);
        am.amount = Set(self.amount);
        am.name = Set(self.name);
        am.description = Set(self.description);
        am.date = Set(self.date);
    }
}

#[instrument(skip(db, input))]
pub async fn create_expense(db: &DatabaseConnection, input: ExpenseInput) -> Result<ExpenseView, ServiceError> {
    let v = input.validate()?;
    let mut am = expense::ActiveModel { ..Default::default() };
    v.apply(&mut am);
    let created = am.insert(db).await?;
    info!(expense_id = created.id, user_id = created.user_id, "expense_created");
    Ok(ExpenseView::from(created).sanitize())
}

pub async fn get_expense(db: &DatabaseConnection, id: i32) -> Result<ExpenseView, ServiceError> {
    let found = expense::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found(NOT_FOUND))?;
    Ok(ExpenseView::from(found).sanitize())
}

/// Expenses of one user, oldest first.
pub async fn list_expenses_by_user(db: &DatabaseConnection, user_id: i32) -> Result<Vec<ExpenseView>, ServiceError> {
    let rows = expense::Entity::find()
        .filter(expense::Column::UserId.eq(user_id))
        .order_by_asc(expense::Column::Date)
        .order_by_asc(expense::Column::Id)
        .all(db)
        .await?;
    Ok(rows.into_iter().map(ExpenseView::from).collect::<Vec<_>>().sanitize())
}

/// Update matched by (id, user_id); a row owned by someone else reads as missing.
#[instrument(skip(db, input))]
pub async fn update_expense(db: &DatabaseConnection, id: i32, input: ExpenseInput) -> Result<ExpenseView, ServiceError> {
    let v = input.validate()?;
    let mut am: expense::ActiveModel = expense::Entity::find_by_id(id)
        .filter(expense::Column::UserId.eq(v.user_id))
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found(NOT_FOUND))?
        .into();
    v.apply(&mut am);
    let updated = am.update(db).await?;
    info!(expense_id = id, "expense_updated");
    Ok(ExpenseView::from(updated).sanitize())
}

#[instrument(skip(db, input))]
pub async fn delete_expense(db: &DatabaseConnection, id: i32, input: OwnerInput) -> Result<u64, ServiceError> {
    let user_id = input.user_id()?;
    let res = expense::Entity::delete_many()
        .filter(expense::Column::Id.eq(id))
        .filter(expense::Column::UserId.eq(user_id))
        .exec(db)
        .await?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found(NOT_FOUND));
    }
    info!(expense_id = id, user_id, "expense_deleted");
    Ok(res.rows_affected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{get_db, seed_owner};
    use std::str::FromStr;

    fn sample(user_id: i32, type_id: i32) -> ExpenseInput {
        ExpenseInput {
            user_id: Some(user_id as i64),
            type_id: Some(type_id as i64),
            amount: Some(Decimal::from_str("42.50").unwrap()),
            name: Some("Internet".into()),
            description: Some("Fiber plan".into()),
            date: Some("2024-05-01".into()),
        }
    }

    #[test]
    fn validation_order_and_zero_amount() {
        let err = ExpenseInput { user_id: None, type_id: None, ..sample(1, 1) }.validate().unwrap_err();
        assert_eq!(err.to_string(), "user_id is mandatory");
        let err = ExpenseInput { amount: None, name: None, ..sample(1, 1) }.validate().unwrap_err();
        assert_eq!(err.to_string(), "amount is mandatory");
        let ok = ExpenseInput { amount: Some(Decimal::ZERO), date: Some("05/01/2024".into()), ..sample(1, 1) }
            .validate()
            .unwrap();
        assert_eq!(ok.amount, Decimal::ZERO);
        assert_eq!(ok.date, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
    }

    #[test]
    fn sanitize_keeps_numbers() {
        let v = ExpenseView {
            id: 1,
            user_id: 2,
            type_id: 3,
            amount: Decimal::from_str("9.99").unwrap(),
            name: "<script>x</script>Gas".into(),
            description: "ok".into(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        };
        let s = v.clone().sanitize();
        assert_eq!(s.name, "Gas");
        assert_eq!((s.id, s.amount, s.date), (v.id, v.amount, v.date));
    }

    #[tokio::test]
    async fn expense_crud_service() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await else { return Ok(()) };
        let (owner, type_id) = seed_owner(&db).await?;
        let (other, _) = seed_owner(&db).await?;

        let later = create_expense(&db, ExpenseInput { date: Some("2024-06-01".into()), ..sample(owner, type_id) }).await?;
        let earlier = create_expense(&db, sample(owner, type_id)).await?;
        assert_eq!(earlier.amount, Decimal::from_str("42.50")?);

        let listed = list_expenses_by_user(&db, owner).await?;
        assert_eq!(listed.iter().map(|e| e.id).collect::<Vec<_>>(), vec![earlier.id, later.id]);
        assert!(list_expenses_by_user(&db, other).await?.is_empty());

        let err = update_expense(&db, earlier.id, sample(other, type_id)).await.unwrap_err();
        assert_eq!(err.to_string(), NOT_FOUND);
        let updated = update_expense(&db, earlier.id, ExpenseInput { name: Some("ISP".into()), ..sample(owner, type_id) }).await?;
        assert_eq!(updated.name, "ISP");

        let err = delete_expense(&db, earlier.id, OwnerInput { user_id: Some(other as i64) }).await.unwrap_err();
        assert_eq!(err.status(), 404);
        assert_eq!(delete_expense(&db, earlier.id, OwnerInput { user_id: Some(owner as i64) }).await?, 1);
        assert_eq!(get_expense(&db, earlier.id).await.unwrap_err().to_string(), NOT_FOUND);
        Ok(())
    }
}
