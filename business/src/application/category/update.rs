use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::model::Category;
use crate::domain::category::repository::CategoryRepository;
use crate::domain::category::use_cases::update::{UpdateCategoryParams, UpdateCategoryUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct UpdateCategoryUseCaseImpl {
    pub repository: Arc<dyn CategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateCategoryUseCase for UpdateCategoryUseCaseImpl {
    async fn execute(&self, params: UpdateCategoryParams) -> Result<Category, CategoryError> {
        self.logger
            .info(&format!("Updating category: {}", params.id));

        let existing = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CategoryError::NotFound,
                other => CategoryError::Repository(other),
            })?;

        let updated = existing.renamed(params.name)?;

        // Products only reference category ids, so cached products stay valid.
        self.repository
            .save(&updated)
            .await
            .map_err(|e| match e {
                RepositoryError::Duplicated => CategoryError::NameTaken,
                other => CategoryError::Repository(other),
            })?;

        self.logger
            .info(&format!("Category updated: {}", updated.id));
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MockCategoryRepo, make_category, mock_logger};
    use uuid::Uuid;

    #[tokio::test]
    async fn should_rename_category_when_exists() {
        let id = Uuid::new_v4();
        let mut repo = MockCategoryRepo::new();
        repo.expect_get_by_id()
            .returning(|id| Ok(make_category(id, "Cofee")));
        repo.expect_save().times(1).returning(|_| Ok(()));

        let use_case = UpdateCategoryUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let category = use_case
            .execute(UpdateCategoryParams {
                id,
                name: "Coffee".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(category.id, id);
        assert_eq!(category.name, "Coffee");
    }

    #[tokio::test]
    async fn should_return_not_found_when_category_missing() {
        let mut repo = MockCategoryRepo::new();
        repo.expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = UpdateCategoryUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateCategoryParams {
                id: Uuid::new_v4(),
                name: "Coffee".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), CategoryError::NotFound));
    }

    #[tokio::test]
    async fn should_report_name_taken_when_renaming_to_existing() {
        let mut repo = MockCategoryRepo::new();
        repo.expect_get_by_id()
            .returning(|id| Ok(make_category(id, "Tea")));
        repo.expect_save()
            .returning(|_| Err(RepositoryError::Duplicated));

        let use_case = UpdateCategoryUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateCategoryParams {
                id: Uuid::new_v4(),
                name: "Coffee".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), CategoryError::NameTaken));
    }
}
