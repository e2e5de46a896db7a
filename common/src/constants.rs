pub const RESTAURANT_NAME: &str = "Vamos Food";
pub const RESTAURANT_TITLE: &str = "ڤاموس فود - Vamos Food";
pub const RESTAURANT_TAGLINE: &str = "سعادتك تبدأ من هنا 🍔";
pub const RESTAURANT_ADDRESS: &str =
    "صنعاء - شارع النصر - فتحة سوق آية - قبل محطة الهادي للمشتقات النفطية";
pub const WORKING_HOURS: &str = "مواعيد العمل: من 11 صباحاً حتى 12 منتصف الليل";

pub const RESTAURANT_LAT: f64 = 15.4083286;
pub const RESTAURANT_LNG: f64 = 44.2226482;
pub const DELIVERY_RADIUS_KM: f64 = 3.0;
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Phone number in international form without the leading `+`.
pub const ORDER_PHONE: &str = "967782977923";
pub const RESTAURANT_EMAIL: &str = "vamosfood1@gmail.com";
pub const WHATSAPP_BASE_URL: &str = "https://wa.me";
pub const MAPS_URL: &str = "https://maps.app.goo.gl/hpLQVoSj5LdXjSoP7";
pub const INSTAGRAM_URL: &str = "https://www.instagram.com/vamosfood1?igsh=anFnMHhwanlqM2cz";
pub const FACEBOOK_URL: &str = "https://www.facebook.com/share/1BAZWKeUFa/";

pub const CURRENCY: &str = "ريال";
pub const NOT_SPECIFIED: &str = "غير محدد";

pub const DEFAULT_ZOOM: u8 = 14;
pub const MIN_ZOOM: u8 = 13;
pub const MAX_ZOOM: u8 = 17;
/// The view snaps back to the restaurant once its center drifts further than this.
pub const RECENTER_DISTANCE_KM: f64 = 2.0;
pub const KM_PER_DEGREE: f64 = 111.320;
pub const ZONE_SEGMENTS: usize = 64;
pub const MIN_CIRCLE_SEGMENTS: usize = 3;

pub const DELIVERY_TIME: &str = "التوصيل خلال 30-45 دقيقة من وقت تأكيد الطلب";

pub const LOG_LEVEL_ENV: &str = "VAMOS_LOG";
