/**
 * Smoke test against a running mission-poster server
 * Posts a few photos and checks the poster URLs and error paths
 */

use reqwest::multipart;
use std::error::Error;
use std::path::Path;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let base_url = std::env::var("TEST_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());
    let client = reqwest::Client::new();

    println!("🧪 Testing mission-poster with base URL: {}", base_url);
    println!("{}", "=".repeat(80));

    test_photo_uploads(&client, &base_url).await?;
    test_rejected_extension(&client, &base_url).await?;
    test_missing_photo(&base_url).await?;

    println!("\n{}", "=".repeat(80));
    println!("✅ All tests complete!");
    Ok(())
}

/// Upload real photos through the JSON API and download the posters
async fn test_photo_uploads(client: &reqwest::Client, base_url: &str) -> Result<(), Box<dyn Error>> {
    println!("\n📸 TEST: Photo uploads");

    // (test_file_path, upload name, mime type)
    let test_cases = vec![
        ("test-data/photo.jpeg", "photo.jpeg", "image/jpeg"),
        ("test-data/photo.png", "photo.PNG", "image/png"),
        ("test-data/photo.webp", "photo.webp", "image/webp"),
    ];

    for (test_file, upload_name, mime_type) in test_cases {
        println!("\n  📋 Test: {}", upload_name);

        if !Path::new(test_file).exists() {
            println!("     ⚠️  File not found: {}, skipping", test_file);
            continue;
        }
        let data = std::fs::read(test_file)?;

        let form = multipart::Form::new().part(
            "photo",
            multipart::Part::bytes(data)
                .file_name(upload_name.to_string())
                .mime_str(mime_type)?,
        );

        let response = client
            .post(format!("{}/api/analyze", base_url))
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            eprintln!("     ❌ Upload failed: {} {}", response.status(), response.text().await?);
            continue;
        }

        let body: serde_json::Value = response.json().await?;
        let poster_url = body["poster_url"].as_str().ok_or("Missing poster_url in response")?;
        println!("     ✅ Poster: {}", poster_url);
        println!("     💬 Caption: {}", body["caption"].as_str().unwrap_or(""));

        let poster = client.get(format!("{}{}", base_url, poster_url)).send().await?;
        let content_type = poster
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("not set")
            .to_string();
        let bytes = poster.bytes().await?;

        if content_type == "image/png" {
            println!("     ✅ Downloaded {} bytes of PNG", bytes.len());
        } else {
            println!("     ⚠️  Unexpected Content-Type: {}", content_type);
        }
    }

    Ok(())
}

/// A GIF must be refused with the French error message
async fn test_rejected_extension(client: &reqwest::Client, base_url: &str) -> Result<(), Box<dyn Error>> {
    println!("\n🚫 TEST: Unsupported extension");

    let form = multipart::Form::new().part(
        "photo",
        multipart::Part::bytes(b"GIF89a".to_vec()).file_name("photo.GIF"),
    );
    let response = client
        .post(format!("{}/analyze", base_url))
        .multipart(form)
        .send()
        .await?;

    let status = response.status();
    let text = response.text().await?;
    if status == reqwest::StatusCode::BAD_REQUEST {
        println!("  ✅ Rejected: {}", text);
    } else {
        println!("  ⚠️  Expected 400, got {}: {}", status, text);
    }

    Ok(())
}

/// A form without the photo field redirects back to the form
async fn test_missing_photo(base_url: &str) -> Result<(), Box<dyn Error>> {
    println!("\n↩️  TEST: Missing photo");

    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;
    let form = multipart::Form::new().text("note", "no photo here");
    let response = client
        .post(format!("{}/analyze", base_url))
        .multipart(form)
        .send()
        .await?;

    let location = response
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    if response.status().is_redirection() && location == "/" {
        println!("  ✅ Redirected to form");
    } else {
        println!("  ⚠️  Expected redirect to /, got {} (location {:?})", response.status(), location);
    }

    Ok(())
}
