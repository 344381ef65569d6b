use actix_web::{delete, get, patch, post, HttpResponse, Result};
use actix_web::web::{Data, Json, Path};
use validator::Validate;

use crate::models::common::ApiResponse;
use crate::models::notification::{CreateNotificationRequest, Notification};
use crate::services::registry::NotificationRegistry;

#[get("")]
pub async fn list_notifications(registry: Data<NotificationRegistry>) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(registry.feed().await))
}

#[patch("/read-all")]
pub async fn mark_all_read(registry: Data<NotificationRegistry>) -> Result<HttpResponse> {
    registry.mark_all_read().await;
    Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_with_message(
        (),
        "All notifications marked as read".to_string(),
    )))
}

#[patch("/{id}/read")]
pub async fn mark_read(
    registry: Data<NotificationRegistry>,
    path: Path<String>,
) -> Result<HttpResponse> {
    let id = path.into_inner();

    if registry.mark_read(&id).await {
        Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_with_message(
            (),
            "Notification marked as read".to_string(),
        )))
    } else {
        Ok(HttpResponse::NotFound()
            .json(ApiResponse::<()>::error(format!("Notification {} not found", id))))
    }
}

#[delete("/{id}")]
pub async fn delete_notification(
    registry: Data<NotificationRegistry>,
    path: Path<String>,
) -> Result<HttpResponse> {
    let id = path.into_inner();

    if registry.delete(&id).await {
        Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_with_message(
            (),
            "Notification deleted".to_string(),
        )))
    } else {
        Ok(HttpResponse::NotFound()
            .json(ApiResponse::<()>::error(format!("Notification {} not found", id))))
    }
}

#[post("")]
pub async fn create_notification(
    registry: Data<NotificationRegistry>,
    payload: Json<CreateNotificationRequest>,
) -> Result<HttpResponse> {
    if let Err(errors) = payload.validate() {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::<()>::error(format!("Invalid notification: {}", errors))));
    }

    let created = registry.create(payload.into_inner()).await;
    log::info!("Created notification {} ({})", created.id, created.title);

    Ok(HttpResponse::Created().json(ApiResponse::<Notification>::success(created)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::notification::NotificationFeed;
    use actix_web::{test, web, App};

    async fn seeded_registry() -> (NotificationRegistry, Notification) {
        let registry = NotificationRegistry::new();
        let created = registry
            .create(CreateNotificationRequest {
                title: "Monthly contribution due".to_string(),
                message: "KSh 5000 due by Friday".to_string(),
                ..Default::default()
            })
            .await;
        (registry, created)
    }

    macro_rules! notification_app {
        ($registry:expr) => {
            test::init_service(
                App::new().app_data(Data::new($registry.clone())).service(
                    web::scope("/api/notifications")
                        .service(list_notifications)
                        .service(mark_all_read)
                        .service(mark_read)
                        .service(delete_notification)
                        .service(create_notification),
                ),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_list_returns_feed_with_unread_count() {
        let (registry, _) = seeded_registry().await;
        let app = notification_app!(registry);

        let request = test::TestRequest::get().uri("/api/notifications").to_request();
        let feed: NotificationFeed = test::call_and_read_body_json(&app, request).await;

        assert_eq!(feed.notifications.len(), 1);
        assert_eq!(feed.unread_count, 1);
    }

    #[actix_web::test]
    async fn test_mark_read_roundtrip() {
        let (registry, created) = seeded_registry().await;
        let app = notification_app!(registry);

        let request = test::TestRequest::patch()
            .uri(&format!("/api/notifications/{}/read", created.id))
            .to_request();
        let response = test::call_service(&app, request).await;
        assert!(response.status().is_success());

        let request = test::TestRequest::get().uri("/api/notifications").to_request();
        let feed: NotificationFeed = test::call_and_read_body_json(&app, request).await;
        assert_eq!(feed.unread_count, 0);
    }

    #[actix_web::test]
    async fn test_mark_read_unknown_id_is_404() {
        let (registry, _) = seeded_registry().await;
        let app = notification_app!(registry);

        let request = test::TestRequest::patch()
            .uri("/api/notifications/unknown/read")
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_read_all_does_not_collide_with_id_route() {
        let (registry, _) = seeded_registry().await;
        let app = notification_app!(registry);

        let request = test::TestRequest::patch()
            .uri("/api/notifications/read-all")
            .to_request();
        let response = test::call_service(&app, request).await;
        assert!(response.status().is_success());

        let request = test::TestRequest::get().uri("/api/notifications").to_request();
        let feed: NotificationFeed = test::call_and_read_body_json(&app, request).await;
        assert_eq!(feed.unread_count, 0);
    }

    #[actix_web::test]
    async fn test_create_assigns_server_id() {
        let registry = NotificationRegistry::new();
        let app = notification_app!(registry);

        // Clients post their full optimistic entity; the server only reads
        // the creation fields and assigns its own id.
        let request = test::TestRequest::post()
            .uri("/api/notifications")
            .set_json(serde_json::json!({
                "id": "client-id",
                "title": "T",
                "message": "M",
                "read": false,
                "createdAt": "2026-01-05T08:00:00Z"
            }))
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), actix_web::http::StatusCode::CREATED);

        let feed = registry.feed().await;
        assert_eq!(feed.notifications.len(), 1);
        assert_ne!(feed.notifications[0].id, "client-id");
    }

    #[actix_web::test]
    async fn test_create_rejects_empty_title() {
        let registry = NotificationRegistry::new();
        let app = notification_app!(registry);

        let request = test::TestRequest::post()
            .uri("/api/notifications")
            .set_json(serde_json::json!({ "title": "", "message": "M" }))
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_delete_roundtrip() {
        let (registry, created) = seeded_registry().await;
        let app = notification_app!(registry);

        let request = test::TestRequest::delete()
            .uri(&format!("/api/notifications/{}", created.id))
            .to_request();
        let response = test::call_service(&app, request).await;
        assert!(response.status().is_success());

        let request = test::TestRequest::delete()
            .uri(&format!("/api/notifications/{}", created.id))
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
    }
}
