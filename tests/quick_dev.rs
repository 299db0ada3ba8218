use anyhow::Result;
use serde_json::json;

#[tokio::test]
#[ignore = "needs a server running on localhost:8080"]
async fn quick_dev() -> Result<()> {
    let hc = httpc_test::new_client("http://localhost:8080/api")?;

    hc.do_post(
        "/contact",
        json!({
          "name": "Ann",
          "email": "ann@x.com",
          "company": "Acme",
          "message": "Hi, we need a new website.",
        }),
    )
    .await?
    .print()
    .await?;

    hc.do_get("/contact").await?.print().await?;

    hc.do_post(
        "/blog",
        json!({
          "title": "Shipping the redesign",
          "slug": "shipping-the-redesign",
          "excerpt": "What changed and why",
          "content": "Full write-up goes here.",
          "category": "News",
          "author": "Studio team",
          "coverImage": "/images/redesign-cover.webp",
        }),
    )
    .await?
    .print()
    .await?;

    // Draft posts only show up with ?all=true.
    hc.do_get("/blog").await?.print().await?;
    hc.do_get("/blog?all=true").await?.print().await?;

    hc.do_patch(
        "/blog/shipping-the-redesign",
        json!({ "published": true }),
    )
    .await?
    .print()
    .await?;

    hc.do_get("/blog/shipping-the-redesign").await?.print().await?;

    // hc.do_delete("/blog/shipping-the-redesign")
    //     .await?
    //     .print()
    //     .await?;

    Ok(())
}
