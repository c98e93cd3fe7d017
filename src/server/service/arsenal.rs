use dioxus_logger::tracing;
use futures::future::try_join_all;
use sea_orm::DatabaseConnection;

use crate::{
    model::arsenal::{ArsenalItemDto, ArsenalKind},
    server::{
        data::arsenal::ArsenalRepository,
        error::{arsenal::ArsenalError, Error},
        service::resolver::ReferenceResolver,
    },
};

pub struct ArsenalService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ArsenalService<'a> {
    /// Creates a new instance of [`ArsenalService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the equipment of one category with event references resolved to names
    ///
    /// Unresolvable references become sentinel labels; only a failure of the category
    /// query itself fails the listing.
    pub async fn fetch(&self, kind: ArsenalKind) -> Result<Vec<ArsenalItemDto>, Error> {
        let arsenal_repo = ArsenalRepository::new(self.db);

        let items = arsenal_repo.get_by_kind(kind).await?;

        try_join_all(items.into_iter().map(|item| self.to_dto(item))).await
    }

    /// Adds a new item to the registry with an empty event list
    pub async fn create(&self, name: &str, kind: ArsenalKind) -> Result<ArsenalItemDto, Error> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ArsenalError::EmptyName.into());
        }

        let arsenal_repo = ArsenalRepository::new(self.db);
        let item = arsenal_repo.create(name, kind).await?;

        tracing::info!(item_id = item.id, kind = %kind, "Added equipment {:?}", item.name);

        Ok(ArsenalItemDto {
            id: item.id,
            name: item.name,
            kind,
            events: Vec::new(),
            date_added: item.date_added,
        })
    }

    /// Renames an item, leaving its category and event list untouched
    pub async fn rename(&self, item_id: i32, name: &str) -> Result<ArsenalItemDto, Error> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ArsenalError::EmptyName.into());
        }

        let arsenal_repo = ArsenalRepository::new(self.db);
        let Some(item) = arsenal_repo.rename(item_id, name).await? else {
            return Err(ArsenalError::NotFound(item_id).into());
        };

        self.to_dto(item).await
    }

    /// Deletes an item, returning the category it belonged to
    ///
    /// Events still referencing the item keep the reference and show it as unknown.
    pub async fn delete(&self, item_id: i32) -> Result<ArsenalKind, Error> {
        let arsenal_repo = ArsenalRepository::new(self.db);

        let Some(item) = arsenal_repo.get_by_id(item_id).await? else {
            return Err(ArsenalError::NotFound(item_id).into());
        };
        let kind = parse_kind(&item)?;

        let result = arsenal_repo.delete(item_id).await?;
        if result.rows_affected == 0 {
            return Err(ArsenalError::NotFound(item_id).into());
        }

        tracing::info!(item_id = item_id, kind = %kind, "Deleted equipment {:?}", item.name);

        Ok(kind)
    }

    async fn to_dto(&self, item: entity::arsenal::Model) -> Result<ArsenalItemDto, Error> {
        let arsenal_repo = ArsenalRepository::new(self.db);
        let resolver = ReferenceResolver::new(self.db);

        let kind = parse_kind(&item)?;
        let refs = arsenal_repo.get_event_refs(item.id).await?;
        let events = resolver.event_names(&refs).await;

        Ok(ArsenalItemDto {
            id: item.id,
            name: item.name,
            kind,
            events,
            date_added: item.date_added,
        })
    }
}

fn parse_kind(item: &entity::arsenal::Model) -> Result<ArsenalKind, ArsenalError> {
    item.kind
        .parse::<ArsenalKind>()
        .map_err(|_| ArsenalError::CorruptKind {
            id: item.id,
            kind: item.kind.clone(),
        })
}

#[cfg(test)]
mod tests {
    mod fetch {
        use mission_control_test_utils::prelude::*;

        use crate::{model::arsenal::ArsenalKind, server::service::arsenal::ArsenalService};

        /// Expect event names aligned with the stored references, sentinels included
        #[tokio::test]
        async fn resolves_event_labels() -> Result<(), TestError> {
            let test = TestBuilder::new().with_dashboard_tables().build().await?;
            let wedding = test.fixtures().insert_event("Wedding", "2026-10-16", false).await?;
            let blank = test.fixtures().insert_event("", "2026-10-17", false).await?;
            let item = test.fixtures().insert_arsenal("Canon R6", "camera").await?;
            test.fixtures()
                .link_events(item.id, &[wedding.id, 999, blank.id, wedding.id])
                .await?;

            let arsenal_service = ArsenalService::new(&test.db);
            let items = arsenal_service.fetch(ArsenalKind::Camera).await.unwrap();

            assert_eq!(items.len(), 1);
            assert_eq!(
                items[0].events,
                vec![
                    "Wedding",
                    "Unknown Event (Reference not found)",
                    "Unknown Event",
                    "Wedding",
                ]
            );

            Ok(())
        }

        /// Expect only the requested category
        #[tokio::test]
        async fn lists_single_category() -> Result<(), TestError> {
            let test = TestBuilder::new().with_dashboard_tables().build().await?;
            test.fixtures().insert_arsenal("Canon R6", "camera").await?;
            let laptop = test.fixtures().insert_arsenal("ThinkPad", "laptop").await?;

            let arsenal_service = ArsenalService::new(&test.db);
            let items = arsenal_service.fetch(ArsenalKind::Laptop).await.unwrap();

            assert_eq!(items.len(), 1);
            assert_eq!(items[0].id, laptop.id);
            assert_eq!(items[0].kind, ArsenalKind::Laptop);
            assert!(items[0].events.is_empty());

            Ok(())
        }

        /// Expect Error when the category query fails
        #[tokio::test]
        async fn fails_when_tables_missing() -> Result<(), TestError> {
            let test = TestBuilder::new().build().await?;

            let arsenal_service = ArsenalService::new(&test.db);
            let result = arsenal_service.fetch(ArsenalKind::Camera).await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod create {
        use mission_control_test_utils::prelude::*;

        use crate::{
            model::arsenal::ArsenalKind,
            server::{
                error::{arsenal::ArsenalError, Error},
                service::arsenal::ArsenalService,
            },
        };

        /// Expect the item listed under its category afterwards
        #[tokio::test]
        async fn adds_item_to_category() -> Result<(), TestError> {
            let test = TestBuilder::new().with_dashboard_tables().build().await?;

            let arsenal_service = ArsenalService::new(&test.db);
            let created = arsenal_service
                .create("  DNP DS620 ", ArsenalKind::Printer)
                .await
                .unwrap();

            assert_eq!(created.name, "DNP DS620");
            assert!(created.events.is_empty());

            let printers = arsenal_service.fetch(ArsenalKind::Printer).await.unwrap();
            assert_eq!(printers.len(), 1);
            assert_eq!(printers[0].id, created.id);
            assert_eq!(printers[0].name, "DNP DS620");

            Ok(())
        }

        /// Expect EmptyName for a blank name
        #[tokio::test]
        async fn rejects_blank_name() -> Result<(), TestError> {
            let test = TestBuilder::new().with_dashboard_tables().build().await?;

            let arsenal_service = ArsenalService::new(&test.db);
            let result = arsenal_service.create("   ", ArsenalKind::Camera).await;

            assert!(matches!(
                result,
                Err(Error::ArsenalError(ArsenalError::EmptyName))
            ));

            Ok(())
        }
    }

    mod rename {
        use mission_control_test_utils::prelude::*;

        use crate::{
            model::arsenal::ArsenalKind,
            server::{
                error::{arsenal::ArsenalError, Error},
                service::arsenal::ArsenalService,
            },
        };

        /// Expect the new name with category and event labels kept
        #[tokio::test]
        async fn renames_and_keeps_events() -> Result<(), TestError> {
            let test = TestBuilder::new().with_dashboard_tables().build().await?;
            let event = test.fixtures().insert_event("Debut", "2026-10-16", false).await?;
            let item = test.fixtures().insert_arsenal("MacBook", "laptop").await?;
            test.fixtures().link_events(item.id, &[event.id]).await?;

            let arsenal_service = ArsenalService::new(&test.db);
            let renamed = arsenal_service.rename(item.id, "MacBook Pro").await.unwrap();

            assert_eq!(renamed.name, "MacBook Pro");
            assert_eq!(renamed.kind, ArsenalKind::Laptop);
            assert_eq!(renamed.events, vec!["Debut"]);

            Ok(())
        }

        /// Expect other items of the category untouched after a rename
        #[tokio::test]
        async fn leaves_siblings_unchanged() -> Result<(), TestError> {
            let test = TestBuilder::new().with_dashboard_tables().build().await?;
            let event = test.fixtures().insert_event("Debut", "2026-10-16", false).await?;
            let renamed = test.fixtures().insert_arsenal("MacBook", "laptop").await?;
            let sibling = test.fixtures().insert_arsenal("ThinkPad", "laptop").await?;
            test.fixtures().link_events(sibling.id, &[event.id, 404]).await?;

            let arsenal_service = ArsenalService::new(&test.db);
            arsenal_service.rename(renamed.id, "MacBook Pro").await.unwrap();
            let items = arsenal_service.fetch(ArsenalKind::Laptop).await.unwrap();

            assert_eq!(items.len(), 2);
            assert_eq!(items[0].name, "MacBook Pro");
            assert_eq!(items[1].id, sibling.id);
            assert_eq!(items[1].name, "ThinkPad");
            assert_eq!(
                items[1].events,
                vec!["Debut", "Unknown Event (Reference not found)"]
            );

            Ok(())
        }

        /// Expect NotFound for an unknown item
        #[tokio::test]
        async fn fails_for_unknown_item() -> Result<(), TestError> {
            let test = TestBuilder::new().with_dashboard_tables().build().await?;

            let arsenal_service = ArsenalService::new(&test.db);
            let result = arsenal_service.rename(7, "Anything").await;

            assert!(matches!(
                result,
                Err(Error::ArsenalError(ArsenalError::NotFound(7)))
            ));

            Ok(())
        }

        /// Expect EmptyName and the stored name unchanged
        #[tokio::test]
        async fn rejects_blank_name() -> Result<(), TestError> {
            let test = TestBuilder::new().with_dashboard_tables().build().await?;
            let item = test.fixtures().insert_arsenal("MacBook", "laptop").await?;

            let arsenal_service = ArsenalService::new(&test.db);
            let result = arsenal_service.rename(item.id, "").await;

            assert!(matches!(
                result,
                Err(Error::ArsenalError(ArsenalError::EmptyName))
            ));
            let items = arsenal_service.fetch(ArsenalKind::Laptop).await.unwrap();
            assert_eq!(items[0].name, "MacBook");

            Ok(())
        }
    }

    mod delete {
        use mission_control_test_utils::prelude::*;

        use crate::{
            model::arsenal::ArsenalKind,
            server::{
                error::{arsenal::ArsenalError, Error},
                service::arsenal::ArsenalService,
            },
        };

        /// Expect the item gone and its category returned
        #[tokio::test]
        async fn removes_item() -> Result<(), TestError> {
            let test = TestBuilder::new().with_dashboard_tables().build().await?;
            let item = test.fixtures().insert_arsenal("Canon R6", "camera").await?;

            let arsenal_service = ArsenalService::new(&test.db);
            let kind = arsenal_service.delete(item.id).await.unwrap();

            assert_eq!(kind, ArsenalKind::Camera);
            assert!(arsenal_service.fetch(ArsenalKind::Camera).await.unwrap().is_empty());

            Ok(())
        }

        /// Expect items of other categories to survive the deletion
        #[tokio::test]
        async fn leaves_other_categories() -> Result<(), TestError> {
            let test = TestBuilder::new().with_dashboard_tables().build().await?;
            let camera = test.fixtures().insert_arsenal("Canon R6", "camera").await?;
            let laptop = test.fixtures().insert_arsenal("ThinkPad", "laptop").await?;

            let arsenal_service = ArsenalService::new(&test.db);
            arsenal_service.delete(camera.id).await.unwrap();

            assert!(arsenal_service.fetch(ArsenalKind::Camera).await.unwrap().is_empty());
            let laptops = arsenal_service.fetch(ArsenalKind::Laptop).await.unwrap();
            assert_eq!(laptops.len(), 1);
            assert_eq!(laptops[0].id, laptop.id);
            assert_eq!(laptops[0].name, "ThinkPad");

            Ok(())
        }

        /// Expect NotFound when deleting twice
        #[tokio::test]
        async fn fails_for_unknown_item() -> Result<(), TestError> {
            let test = TestBuilder::new().with_dashboard_tables().build().await?;
            let item = test.fixtures().insert_arsenal("Canon R6", "camera").await?;

            let arsenal_service = ArsenalService::new(&test.db);
            arsenal_service.delete(item.id).await.unwrap();
            let result = arsenal_service.delete(item.id).await;

            assert!(matches!(
                result,
                Err(Error::ArsenalError(ArsenalError::NotFound(_)))
            ));

            Ok(())
        }
    }
}
