use crate::models::{
    property::Property,
    search::{SearchFilters, SearchParams, SortBy},
    search_response::SearchResponse,
};
use crate::services::pagination::{self, DEFAULT_PAGE};

/// Keep the properties that satisfy every criterion present in `filters`.
///
/// Relative order of the input is preserved. Absent criteria match everything.
pub fn filter_properties(properties: &[Property], filters: &SearchFilters) -> Vec<Property> {
    properties
        .iter()
        .filter(|property| matches_filters(property, filters))
        .cloned()
        .collect()
}

pub fn matches_filters(property: &Property, filters: &SearchFilters) -> bool {
    if let Some(location) = &filters.location {
        let needle = location.to_lowercase();
        if !property.city.to_lowercase().contains(&needle)
            && !property.country.to_lowercase().contains(&needle)
        {
            return false;
        }
    }

    if let Some(range) = &filters.price_range {
        if range.min.is_some_and(|min| property.price_per_night < min) {
            return false;
        }
        if range.max.is_some_and(|max| property.price_per_night > max) {
            return false;
        }
    }

    if let Some(rating) = filters.rating {
        if property.rating < rating {
            return false;
        }
    }

    if let Some(class) = filters.property_class {
        if property.star_rating != class {
            return false;
        }
    }

    if let Some(amenities) = &filters.amenities {
        if !amenities.iter().all(|amenity| property.has_amenity(amenity)) {
            return false;
        }
    }

    if let Some(popular) = &filters.popular_filters {
        if !popular.iter().all(|filter| filter.matches(property)) {
            return false;
        }
    }

    true
}

/// Stable sort; `Distance` and `None` keep the current order.
pub fn sort_properties(properties: &mut [Property], sort_by: Option<SortBy>) {
    match sort_by {
        Some(SortBy::Price) => {
            properties.sort_by(|a, b| a.price_per_night.total_cmp(&b.price_per_night))
        }
        Some(SortBy::Rating) => properties.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        Some(SortBy::Distance) | None => {}
    }
}

/// Filter, sort and paginate in one pass, producing the `/api/search` payload.
pub fn search(properties: &[Property], params: &SearchParams, default_limit: usize) -> SearchResponse {
    let mut matched = filter_properties(properties, &params.filters);
    sort_properties(&mut matched, params.sort_by);

    let page = params.page.filter(|p| *p > 0).unwrap_or(DEFAULT_PAGE);
    let limit = params.limit.filter(|l| *l > 0).unwrap_or(default_limit);
    let sliced = pagination::paginate(&matched, page, limit);
    let total_pages = pagination::total_pages(sliced.total, limit);

    log::debug!(
        "Search matched {} of {} properties (page {}/{})",
        sliced.total,
        properties.len(),
        page,
        total_pages
    );

    SearchResponse {
        properties: sliced.items,
        total: sliced.total,
        page,
        limit,
        total_pages,
        page_numbers: pagination::page_numbers(page, total_pages),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::search::{PopularFilter, PriceRange};

    fn property(id: &str, city: &str, country: &str, price: f64, rating: f64, stars: u8) -> Property {
        Property {
            id: id.to_string(),
            name: format!("Hotel {}", id),
            location: format!("{}, {}", city, country),
            city: city.to_string(),
            country: country.to_string(),
            distance_from_center: "1 km from center".to_string(),
            rating,
            review_count: 10,
            price_per_night: price,
            image: String::new(),
            images: vec![],
            star_rating: stars,
            amenities: vec![],
            tags: vec![],
            rooms: vec![],
            reviews: vec![],
            description: String::new(),
            check_in_time: "15:00".to_string(),
            check_out_time: "11:00".to_string(),
            house_rules: vec![],
        }
    }

    fn sample() -> Vec<Property> {
        let mut cheap = property("a", "Madrid", "Spain", 40.0, 7.1, 2);
        cheap.tags.push("Hostel/Backpacker".to_string());
        let mut mid = property("b", "Barcelona", "Spain", 90.0, 8.4, 3);
        mid.amenities = vec!["Free WiFi".to_string(), "Breakfast included".to_string()];
        let mut upper = property("c", "Paris", "France", 120.0, 9.2, 4);
        upper.amenities = vec!["Free WiFi".to_string(), "Pool".to_string()];
        let lux = property("d", "Lisbon", "Portugal", 160.0, 5.5, 5);
        vec![cheap, mid, upper, lux]
    }

    fn ids(properties: &[Property]) -> Vec<&str> {
        properties.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_empty_filters_return_everything_in_order() {
        let all = sample();
        let result = filter_properties(&all, &SearchFilters::default());
        assert_eq!(result, all);
    }

    #[test]
    fn test_price_range_bounds_are_inclusive() {
        let all = sample();
        let max = SearchFilters {
            price_range: Some(PriceRange { min: None, max: Some(49.0) }),
            ..Default::default()
        };
        assert_eq!(ids(&filter_properties(&all, &max)), vec!["a"]);

        let min = SearchFilters {
            price_range: Some(PriceRange { min: Some(150.0), max: None }),
            ..Default::default()
        };
        assert_eq!(ids(&filter_properties(&all, &min)), vec!["d"]);

        let exact = SearchFilters {
            price_range: Some(PriceRange { min: Some(90.0), max: Some(120.0) }),
            ..Default::default()
        };
        assert_eq!(ids(&filter_properties(&all, &exact)), vec!["b", "c"]);
    }

    #[test]
    fn test_location_matches_city_or_country_case_insensitively() {
        let all = sample();
        let spain = SearchFilters {
            location: Some("sPaIn".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&filter_properties(&all, &spain)), vec!["a", "b"]);

        let city = SearchFilters {
            location: Some("pari".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&filter_properties(&all, &city)), vec!["c"]);
    }

    #[test]
    fn test_rating_class_and_amenities() {
        let all = sample();
        let rated = SearchFilters {
            rating: Some(8.0),
            ..Default::default()
        };
        assert_eq!(ids(&filter_properties(&all, &rated)), vec!["b", "c"]);

        let class = SearchFilters {
            property_class: Some(5),
            ..Default::default()
        };
        assert_eq!(ids(&filter_properties(&all, &class)), vec!["d"]);

        let amenities = SearchFilters {
            amenities: Some(vec!["Free WiFi".to_string(), "Pool".to_string()]),
            ..Default::default()
        };
        assert_eq!(ids(&filter_properties(&all, &amenities)), vec!["c"]);
    }

    #[test]
    fn test_criteria_are_combined_with_and() {
        let all = sample();
        let filters = SearchFilters {
            location: Some("spain".to_string()),
            rating: Some(8.0),
            ..Default::default()
        };
        assert_eq!(ids(&filter_properties(&all, &filters)), vec!["b"]);
    }

    #[test]
    fn test_popular_filters() {
        let all = sample();
        let budget = SearchFilters {
            popular_filters: Some(vec![PopularFilter::BudgetHotel]),
            ..Default::default()
        };
        assert_eq!(ids(&filter_properties(&all, &budget)), vec!["a", "b"]);

        let breakfast = SearchFilters {
            popular_filters: Some(vec![PopularFilter::BudgetHotel, PopularFilter::BreakfastIncluded]),
            ..Default::default()
        };
        assert_eq!(ids(&filter_properties(&all, &breakfast)), vec!["b"]);

        let hostel = SearchFilters {
            popular_filters: Some(vec![PopularFilter::HostelBackpacker]),
            ..Default::default()
        };
        assert_eq!(ids(&filter_properties(&all, &hostel)), vec!["a"]);
    }

    #[test]
    fn test_sort_by_price_is_non_decreasing() {
        let mut all = sample();
        all.reverse();
        sort_properties(&mut all, Some(SortBy::Price));
        assert!(all
            .windows(2)
            .all(|pair| pair[0].price_per_night <= pair[1].price_per_night));
    }

    #[test]
    fn test_sort_by_rating_is_descending() {
        let mut all = sample();
        sort_properties(&mut all, Some(SortBy::Rating));
        assert_eq!(ids(&all), vec!["c", "b", "a", "d"]);
    }

    #[test]
    fn test_distance_sort_keeps_filter_order() {
        let mut all = sample();
        all.swap(0, 3);
        let before = ids(&all).iter().map(|s| s.to_string()).collect::<Vec<_>>();
        sort_properties(&mut all, Some(SortBy::Distance));
        assert_eq!(ids(&all), before);
    }

    #[test]
    fn test_repeated_search_is_identical() {
        let all = sample();
        let params = SearchParams {
            filters: SearchFilters {
                location: Some("s".to_string()),
                ..Default::default()
            },
            sort_by: Some(SortBy::Rating),
            ..Default::default()
        };
        let first = search(&all, &params, 10);
        let second = search(&all, &params, 10);
        assert_eq!(ids(&first.properties), ids(&second.properties));
        assert_eq!(first.total, second.total);
    }

    #[test]
    fn test_search_paginates_with_defaults() {
        let all = sample();
        let params = SearchParams {
            page: Some(2),
            limit: Some(3),
            sort_by: Some(SortBy::Price),
            ..Default::default()
        };
        let response = search(&all, &params, 10);
        assert_eq!(ids(&response.properties), vec!["d"]);
        assert_eq!(response.total, 4);
        assert_eq!(response.total_pages, 2);

        let defaults = search(&all, &SearchParams::default(), 10);
        assert_eq!(defaults.page, 1);
        assert_eq!(defaults.limit, 10);
        assert_eq!(defaults.properties.len(), 4);
    }
}
