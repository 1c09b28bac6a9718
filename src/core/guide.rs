use crate::core::extract::{extract_place_names, extract_restaurant_names};
use crate::domain::model::{ImageLink, RouteSummary, TravelGuide, TravelType};
use crate::domain::ports::{Completion, Directions, ImageSearch};
use crate::utils::error::Result;
use std::sync::Arc;
use url::Url;

pub const DIRECTIONS_UNAVAILABLE: &str = "Error: Unable to fetch directions.";

pub fn build_prompt(destination: &str, travel_type: TravelType) -> String {
    format!(
        r#"Please create a detailed and structured travel guide for {destination}, ensuring at least 5 tourist spots are included. For each tourist spot, provide the following details separately and comprehensively:

1. **Overview of {destination}**:
- Provide a brief introduction to the destination.
- Highlight its historical significance, cultural importance, or unique features that make it a popular tourist spot.

2. **Top 5 Tourist Spots**:
For each spot, create a **separate section** with the following subheadings:

2.1 **Name and Description**:
    - Name of the attraction.
    - A detailed description explaining why it is worth visiting.
    - Any unique aspects (e.g., historical value, natural beauty, cultural significance).

2.2 **Tips for Visiting**:
    - Best time to visit (season, time of day).
    - Accessibility tips (e.g., wheelchair access, family-friendly).
    - Recommendations on what to bring or prepare (e.g., sunscreen, cameras).

2.3 **Ticket Information**:
    - Entry fees, categorized into standard, VIP, and discounted tickets (students, seniors, children, etc.).
    - Reservation requirements (e.g., advance bookings for tours or events).

2.4 **Nearby Restaurants**:
    - Recommend 3-4 restaurants near the tourist spot.
    - For each restaurant, include:
        - Name and cuisine type (e.g., vegetarian, vegan, non-vegetarian).
        - Ratings (out of 5 stars).
        - Signature dishes to try.
        - Operational status (open/closed) and reservation requirements.

3. **Local Food and Dining**:
- Highlight iconic dishes and local delicacies specific to the destination.
- Include suggestions for popular food markets or street food vendors.

4. **Must-Do Activities**:
- Provide a list of exciting activities to experience in {destination}.
- Include unique or off-the-beaten-path suggestions, such as cultural festivals or adventure sports.

5. **Packing and Essentials**:
- Recommend essential items to pack based on {destination}'s climate and culture.
- Include any cultural etiquette tips (e.g., clothing norms, behavior in religious sites).

6. **Additional Travel Tips**:
- Best times of the year to visit and weather considerations.
- Transport options for navigating the area.
- Hidden gems or underrated attractions worth exploring.

At the very end of the response, please provide:
1. A Python list named places_for_images containing the names of the 5 recommended tourist spots, like this:
   places_for_images = ["Place 1", "Place 2", "Place 3", "Place 4", "Place 5"]
2. A Python list named restaurants_to_search containing the names of 4 recommended restaurants, like this:
   restaurants_to_search = ["Restaurant 1", "Restaurant 2", "Restaurant 3", "Restaurant 4"]

Ensure the guide is organized with clear headings and subheadings for each tourist spot and restaurant, making it easy for travelers to follow.

{focus}"#,
        destination = destination,
        focus = travel_type.focus(),
    )
}

/// Route text appended to the guide, ending with a Google Maps link.
pub fn render_route(origin: &str, destination: &str, route: &RouteSummary) -> String {
    let mut out = format!(
        "Travel Time: {}\nDistance: {}\n\nStep-by-step Directions:\n",
        route.duration, route.distance
    );
    for step in &route.steps {
        out.push_str(step);
        out.push('\n');
    }

    let link = Url::parse_with_params(
        "https://www.google.com/maps/dir/",
        &[("api", "1"), ("origin", origin), ("destination", destination)],
    )
    .map(|url| url.to_string())
    .unwrap_or_default();
    out.push_str(&format!("\nGoogle Maps Link: {}", link));
    out
}

/// Reshapes the generated text into Markdown and appends image and route sections.
pub fn format_markdown(
    text: &str,
    places: &[String],
    images: &[ImageLink],
    route_info: Option<&str>,
) -> String {
    let mut out = String::new();

    for section in text.split("\n\n") {
        if section.starts_with("**") {
            out.push_str(&format!("# {}\n\n", section.trim_matches('*')));
        } else if section.starts_with('-') {
            out.push_str(&format!("{}\n", section));
        } else {
            out.push_str(&format!("{}\n\n", section));
        }
    }

    out.push_str("\n## Image Links for Tourist Spots\n");
    for (place, image) in places.iter().zip(images) {
        out.push_str(&format!("### {}\n", place));
        match image.url() {
            Some(url) => out.push_str(&format!("![{}]({})\n\n", place, url)),
            None => out.push_str("No image available\n\n"),
        }
    }

    if let Some(route) = route_info {
        out.push_str(&format!("\n## Travel Route Information\n{}", route));
    }

    out
}

pub fn render_page(guide: &TravelGuide) -> String {
    format!(
        "<h1>Travel Guide for {} ({} Trip)</h1><pre>{}</pre>",
        escape_html(&guide.destination),
        guide.travel_type.title(),
        escape_html(&guide.markdown)
    )
}

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Looks up one image per place, in order. Failures become placeholders.
pub async fn lookup_images(images: &dyn ImageSearch, places: &[String]) -> Vec<ImageLink> {
    let mut links = Vec::with_capacity(places.len());
    for place in places {
        let link = match images.first_image(place).await {
            Ok(Some(url)) => ImageLink::Found(url),
            Ok(None) => {
                tracing::info!("No image results found for {}", place);
                ImageLink::NotFound
            }
            Err(e) => {
                tracing::warn!("Error fetching image for {}: {}", place, e);
                ImageLink::Failed
            }
        };
        links.push(link);
    }
    links
}

#[derive(Clone)]
pub struct TravelGuideService {
    completion: Arc<dyn Completion>,
    images: Arc<dyn ImageSearch>,
    directions: Arc<dyn Directions>,
}

impl TravelGuideService {
    pub fn new(
        completion: Arc<dyn Completion>,
        images: Arc<dyn ImageSearch>,
        directions: Arc<dyn Directions>,
    ) -> Self {
        Self {
            completion,
            images,
            directions,
        }
    }

    /// Generates the guide text, then enriches it with images and a route from
    /// `origin`. Only a completion failure is an error.
    pub async fn generate(
        &self,
        destination: &str,
        travel_type: TravelType,
        origin: &str,
    ) -> Result<TravelGuide> {
        tracing::info!(
            "Generating {} travel guide for {}",
            travel_type.title(),
            destination
        );
        let prompt = build_prompt(destination, travel_type);
        let text = self.completion.complete(&prompt).await?;

        let places_for_images = extract_place_names(&text);
        let restaurants_to_search = extract_restaurant_names(&text);
        tracing::debug!(
            "Extracted {} places and {} restaurants",
            places_for_images.len(),
            restaurants_to_search.len()
        );

        let images = lookup_images(self.images.as_ref(), &places_for_images).await;

        let route_info = match self.directions.route(origin, destination).await {
            Ok(route) => render_route(origin, destination, &route),
            Err(e) => {
                tracing::warn!("Directions from {} to {} failed: {}", origin, destination, e);
                DIRECTIONS_UNAVAILABLE.to_string()
            }
        };

        let markdown = format_markdown(&text, &places_for_images, &images, Some(&route_info));

        Ok(TravelGuide {
            destination: destination.to_string(),
            travel_type,
            markdown,
            places_for_images,
            restaurants_to_search,
        })
    }
}
