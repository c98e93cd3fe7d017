use mission_control::{
    model::event::CreateEventDto,
    server::service::{chat::ChatService, event::EventService},
};
use mission_control_test_utils::prelude::*;

mod provision {
    use super::*;

    #[tokio::test]
    /// Expect the provisioned root to be readable with an empty message container
    async fn provisions_readable_root() -> Result<(), TestError> {
        let redis = RedisTest::new().await?;
        let chats = ChatService::with_prefix(&redis.redis_pool, redis.prefix());

        let written = chats.provision(7, "Wedding").await.expect("provision should succeed");
        let read = chats.get(7).await.expect("read should succeed");

        assert_eq!(chats.key(7), redis.key(7));
        assert_eq!(read, Some(written));
        let root = read.unwrap();
        assert_eq!(root.info.name, "Wedding");
        assert!(root.messages.is_empty());

        redis.cleanup(&[7]).await?;

        Ok(())
    }

    #[tokio::test]
    /// Expect Ok(None) for an event without a chat root
    async fn returns_none_when_missing() -> Result<(), TestError> {
        let redis = RedisTest::new().await?;
        let chats = ChatService::with_prefix(&redis.redis_pool, redis.prefix());

        let read = chats.get(42).await.expect("read should succeed");

        assert!(read.is_none());

        Ok(())
    }
}

mod create_event {
    use super::*;

    #[tokio::test]
    /// Expect the event row, a chat root named after it and an edit-mode redirect
    async fn creates_event_with_chat_root() -> Result<(), TestError> {
        let redis = RedisTest::new().await?;
        let test = TestBuilder::new().with_dashboard_tables().build().await?;
        let chats = ChatService::with_prefix(&redis.redis_pool, redis.prefix());

        let event_service = EventService::new(&test.db);
        let created = event_service
            .create(
                &chats,
                &CreateEventDto {
                    name: "Debut".to_string(),
                    date: "2026-10-16".to_string(),
                },
            )
            .await
            .expect("create should succeed");

        assert_eq!(
            created.redirect,
            format!("/dashboard/events/{}?edit=true", created.id)
        );
        let events = test.fixtures().all_events().await?;
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_date, "2026-10-16");

        let root = chats
            .get(created.id)
            .await
            .expect("read should succeed")
            .expect("chat root should exist");
        assert_eq!(root.info.name, "Debut");

        redis.cleanup(&[created.id]).await?;

        Ok(())
    }
}
