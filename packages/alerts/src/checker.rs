// ABOUTME: Background alert sweep over all untriggered alerts
// ABOUTME: Errors are logged and swallowed; failed notifications leave alerts armed

use tracing::{error, info};

use pantry_catalog::Catalog;
use pantry_notify::NotificationGateway;

use crate::storage::AlertStorage;

/// One sweep: compare every untriggered alert's target against the current
/// best price of its product. An alert whose product has left the catalogue
/// is skipped. Nothing here propagates errors to the caller that scheduled
/// the sweep.
pub async fn check_alerts_and_notify(
    catalog: &Catalog,
    storage: &AlertStorage,
    gateway: &dyn NotificationGateway,
) {
    let alerts = match storage.list_untriggered().await {
        Ok(alerts) => alerts,
        Err(e) => {
            error!("Error checking price alerts: {}", e);
            return;
        }
    };

    for alert in alerts {
        let Some(product) = catalog.product_by_id(&alert.product_id) else {
            continue;
        };
        let Some((store, best_price)) = product.store_prices.best_store() else {
            continue;
        };
        if best_price > alert.target_price {
            continue;
        }

        if let Some(email) = &alert.email {
            if let Err(e) = gateway
                .send_price_alert(
                    email,
                    &alert.product_name,
                    alert.target_price,
                    best_price,
                    store.display_name(),
                )
                .await
            {
                // Alert stays armed; the next sweep retries delivery.
                error!("Failed to send email: {}", e);
                continue;
            }
        }

        if let Err(e) = storage.mark_triggered(&alert.id).await {
            error!("Error checking price alerts: {}", e);
            continue;
        }
        info!(
            "Alert {} triggered at {:.2} (target {:.2})",
            alert.id, best_price, alert.target_price
        );
    }
}
