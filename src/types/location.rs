/// A geographical coordinate as latitude and longitude.
///
/// Latitude is the first element (index 0), longitude the second (index 1),
/// both in decimal degrees.
///
/// # Examples
///
/// ```
/// use bioclima::LatLon;
///
/// let mexico_city = LatLon(19.4326, -99.1332);
/// assert_eq!(mexico_city.0, 19.4326); // Latitude
/// assert_eq!(mexico_city.1, -99.1332); // Longitude
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon(pub f64, pub f64);
