// ABOUTME: HTML email rendering for price-drop alerts
// ABOUTME: Produces the subject line and body sent through the notification gateway

/// Rendered email, ready to hand to a gateway.
#[derive(Debug, Clone, PartialEq)]
pub struct Email {
    pub subject: String,
    pub html: String,
}

/// Build the price-drop alert email for a product that hit its target.
pub fn price_drop_email(
    product_name: &str,
    target_price: f64,
    current_price: f64,
    store_name: &str,
) -> Email {
    let subject = format!(
        "🎉 Price Drop: {} is now ${:.2}!",
        product_name, current_price
    );
    let savings = target_price - current_price;
    let search_query = product_name.replace(' ', "%20");

    let html = format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
</head>
<body style="font-family: 'Manrope', Arial, sans-serif; background-color: #FAFAFA; margin: 0; padding: 20px;">
    <div style="max-width: 600px; margin: 0 auto; background-color: white; border: 2px solid black; border-radius: 12px; overflow: hidden;">
        <div style="background-color: #00E676; padding: 20px; text-align: center; border-bottom: 2px solid black;">
            <h1 style="margin: 0; color: black; font-size: 24px;">🎉 Price Drop Alert!</h1>
        </div>
        <div style="padding: 30px;">
            <h2 style="margin: 0 0 10px 0; color: #333;">{product_name}</h2>
            <p style="color: #666; margin: 0 0 20px 0;">A product on your watchlist has dropped in price!</p>
            <div style="background-color: #F4F4F5; border: 2px solid #E4E4E7; border-radius: 8px; padding: 20px; margin: 20px 0;">
                <div style="margin-bottom: 10px;">
                    <span style="color: #666;">Your Target Price:</span>
                    <span style="font-family: monospace; font-weight: bold; float: right;">${target_price:.2}</span>
                </div>
                <div>
                    <span style="color: #666;">Current Price at {store_name}:</span>
                    <span style="font-family: monospace; font-weight: bold; color: #00E676; font-size: 20px; float: right;">${current_price:.2}</span>
                </div>
            </div>
            <p style="color: #666;">You're saving <strong style="color: #00E676;">${savings:.2}</strong> compared to your target!</p>
            <a href="https://pricepantry.app/search?q={search_query}"
               style="display: inline-block; background-color: #00E676; color: black; padding: 12px 24px; text-decoration: none; font-weight: bold; border: 2px solid black; border-radius: 8px; margin-top: 20px;">
                View Deal →
            </a>
        </div>
        <div style="background-color: #F4F4F5; padding: 15px; text-align: center; border-top: 2px solid #E4E4E7;">
            <p style="margin: 0; color: #666; font-size: 12px;">
                PricePantry - Compare grocery prices across Coles, Woolworths, Aldi, IGA &amp; Costco
            </p>
        </div>
    </div>
</body>
</html>"#
    );

    Email { subject, html }
}
