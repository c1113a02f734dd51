//! Schema.org type registry
//!
//! An immutable forest of type definitions with parent links, own-property
//! lists, and matcher keywords. Built once behind a `Lazy` and shared
//! read-only across calls. Property "inheritance" is not subclassing: it is
//! a walk up the parent chain with a first-definition-wins merge by
//! property name.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use serde::Serialize;

/// The guaranteed fallback type when no keyword match clears the threshold.
pub const DEFAULT_TYPE: &str = "LocalBusiness";

/// Keyword that marks the fallback type; excluded from match scoring.
pub const WILDCARD_KEYWORD: &str = "*";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PropertyDef {
    pub name: &'static str,
    pub value_type: &'static str,
    pub required: bool,
}

const fn req(name: &'static str, value_type: &'static str) -> PropertyDef {
    PropertyDef { name, value_type, required: true }
}

const fn opt(name: &'static str, value_type: &'static str) -> PropertyDef {
    PropertyDef { name, value_type, required: false }
}

#[derive(Debug, Serialize)]
pub struct SchemaTypeDef {
    pub name: &'static str,
    pub parent: Option<&'static str>,
    pub description: &'static str,
    pub properties: &'static [PropertyDef],
    pub keywords: &'static [&'static str],
}

const NO_PROPS: &[PropertyDef] = &[];
const NO_KEYWORDS: &[&str] = &[];

const THING_PROPS: &[PropertyDef] = &[
    req("name", "Text"),
    opt("description", "Text"),
    opt("url", "URL"),
    opt("image", "URL"),
];

const ORGANIZATION_PROPS: &[PropertyDef] = &[
    opt("legalName", "Text"),
    opt("logo", "URL"),
    opt("email", "Text"),
    opt("telephone", "Text"),
    opt("sameAs", "URL"),
];

const LOCAL_BUSINESS_PROPS: &[PropertyDef] = &[
    req("address", "PostalAddress"),
    opt("telephone", "Text"),
    opt("openingHoursSpecification", "OpeningHoursSpecification"),
    opt("priceRange", "Text"),
    opt("geo", "GeoCoordinates"),
    opt("aggregateRating", "AggregateRating"),
];

const FOOD_ESTABLISHMENT_PROPS: &[PropertyDef] = &[
    opt("servesCuisine", "Text"),
    opt("menu", "URL"),
    opt("acceptsReservations", "Boolean"),
];

const LODGING_PROPS: &[PropertyDef] = &[
    opt("checkinTime", "Time"),
    opt("checkoutTime", "Time"),
    opt("numberOfRooms", "Number"),
    opt("petsAllowed", "Boolean"),
];

const MEDICAL_PROPS: &[PropertyDef] = &[opt("medicalSpecialty", "Text")];

const SERVICE_PROPS: &[PropertyDef] = &[
    req("serviceType", "Text"),
    opt("provider", "Organization"),
    opt("areaServed", "Text"),
];

const PRODUCT_PROPS: &[PropertyDef] = &[
    opt("sku", "Text"),
    opt("brand", "Brand"),
    opt("offers", "Offer"),
    opt("aggregateRating", "AggregateRating"),
];

const SOFTWARE_PROPS: &[PropertyDef] = &[
    req("applicationCategory", "Text"),
    opt("operatingSystem", "Text"),
    opt("offers", "Offer"),
    opt("softwareVersion", "Text"),
    opt("featureList", "Text"),
];

const ARTICLE_PROPS: &[PropertyDef] = &[
    req("headline", "Text"),
    opt("author", "Person"),
    opt("datePublished", "Date"),
    opt("dateModified", "Date"),
];

macro_rules! t {
    ($name:literal, $parent:expr, $desc:literal, $props:expr, $keywords:expr) => {
        SchemaTypeDef {
            name: $name,
            parent: $parent,
            description: $desc,
            properties: $props,
            keywords: $keywords,
        }
    };
}

/// The whole forest. Roots first, then each branch top-down; the builder
/// only requires that every named parent exists somewhere in the slice.
static TYPE_DEFS: &[SchemaTypeDef] = &[
    // Roots and generic branches
    t!("Thing", None, "Generic root of the hierarchy", THING_PROPS, NO_KEYWORDS),
    t!("CreativeWork", Some("Thing"), "Generic creative work", NO_PROPS, NO_KEYWORDS),
    t!("Article", Some("CreativeWork"), "Written article", ARTICLE_PROPS, &["article", "blog", "news", "editorial"]),
    t!("NewsArticle", Some("Article"), "News report", NO_PROPS, &["news article", "press", "journalism"]),
    t!("BlogPosting", Some("Article"), "Blog post", NO_PROPS, &["blog post", "blogging"]),
    t!("WebSite", Some("CreativeWork"), "A site as a whole", NO_PROPS, NO_KEYWORDS),
    t!("WebPage", Some("CreativeWork"), "A single page", NO_PROPS, NO_KEYWORDS),
    t!("Product", Some("Thing"), "A product offered for sale", PRODUCT_PROPS, &["product", "merchandise", "goods"]),
    t!("Service", Some("Thing"), "A service offered to customers", SERVICE_PROPS, &["service", "services"]),
    t!("SoftwareApplication", Some("CreativeWork"), "A software product", SOFTWARE_PROPS, &["software", "app", "application", "saas", "platform", "tool"]),
    t!("WebApplication", Some("SoftwareApplication"), "Browser-based software", NO_PROPS, &["web app", "web application", "online tool"]),
    t!("MobileApplication", Some("SoftwareApplication"), "Mobile software", NO_PROPS, &["mobile app", "ios app", "android app"]),
    t!("VideoGame", Some("SoftwareApplication"), "A video game", NO_PROPS, &["video game", "game studio", "gaming"]),
    // Organization branch
    t!("Organization", Some("Thing"), "An organization of any kind", ORGANIZATION_PROPS, &["company", "organization", "corporation", "startup"]),
    t!("Corporation", Some("Organization"), "Incorporated company", NO_PROPS, &["corporation", "incorporated", "enterprise"]),
    t!("NGO", Some("Organization"), "Non-governmental organization", NO_PROPS, &["nonprofit", "non-profit", "ngo", "charity", "foundation"]),
    t!("GovernmentOrganization", Some("Organization"), "Government body", NO_PROPS, &["government", "municipal", "agency"]),
    t!("EducationalOrganization", Some("Organization"), "Educational institution", NO_PROPS, &["education", "academy", "institute"]),
    t!("School", Some("EducationalOrganization"), "Primary or secondary school", NO_PROPS, &["school", "elementary school", "high school"]),
    t!("Preschool", Some("EducationalOrganization"), "Preschool", NO_PROPS, &["preschool", "kindergarten", "daycare"]),
    t!("CollegeOrUniversity", Some("EducationalOrganization"), "Higher education", NO_PROPS, &["college", "university", "campus"]),
    t!("PerformingGroup", Some("Organization"), "Performing arts group", NO_PROPS, &["performing group", "ensemble"]),
    t!("MusicGroup", Some("PerformingGroup"), "Band or musical act", NO_PROPS, &["band", "music group", "orchestra", "choir"]),
    t!("DanceGroup", Some("PerformingGroup"), "Dance company", NO_PROPS, &["dance company", "dance troupe"]),
    t!("TheaterGroup", Some("PerformingGroup"), "Theater company", NO_PROPS, &["theater company", "theatre group", "drama"]),
    t!("SportsOrganization", Some("Organization"), "Sports organization", NO_PROPS, &["sports organization", "league"]),
    t!("SportsTeam", Some("SportsOrganization"), "A sports team", NO_PROPS, &["sports team", "football club", "team"]),
    // LocalBusiness branch: the matcher's guaranteed fallback lives here.
    t!("LocalBusiness", Some("Organization"), "A physical business serving a local area", LOCAL_BUSINESS_PROPS, &["*", "local business", "business", "shop"]),
    t!("AnimalShelter", Some("LocalBusiness"), "Animal shelter", NO_PROPS, &["animal shelter", "animal rescue", "adoption center"]),
    t!("ChildCare", Some("LocalBusiness"), "Child care service", NO_PROPS, &["child care", "childcare", "babysitting", "nursery"]),
    t!("DryCleaningOrLaundry", Some("LocalBusiness"), "Dry cleaner or laundry", NO_PROPS, &["dry cleaning", "laundry", "laundromat"]),
    t!("EmergencyService", Some("LocalBusiness"), "Emergency service", NO_PROPS, &["emergency", "fire department", "ambulance"]),
    t!("EmploymentAgency", Some("LocalBusiness"), "Employment agency", NO_PROPS, &["employment agency", "staffing", "recruiting", "recruitment"]),
    t!("InternetCafe", Some("LocalBusiness"), "Internet cafe", NO_PROPS, &["internet cafe", "cyber cafe"]),
    t!("Library", Some("LocalBusiness"), "Library", NO_PROPS, &["library"]),
    t!("ProfessionalService", Some("LocalBusiness"), "Professional service provider", NO_PROPS, &["professional service", "consultant", "consulting", "agency", "freelancer", "studio"]),
    t!("RadioStation", Some("LocalBusiness"), "Radio station", NO_PROPS, &["radio station", "radio"]),
    t!("TelevisionStation", Some("LocalBusiness"), "Television station", NO_PROPS, &["television station", "tv station"]),
    t!("RealEstateAgent", Some("LocalBusiness"), "Real estate agent", NO_PROPS, &["real estate", "realtor", "property management", "broker"]),
    t!("RecyclingCenter", Some("LocalBusiness"), "Recycling center", NO_PROPS, &["recycling", "scrap yard"]),
    t!("SelfStorage", Some("LocalBusiness"), "Self storage facility", NO_PROPS, &["self storage", "storage units"]),
    t!("ShoppingCenter", Some("LocalBusiness"), "Shopping center or mall", NO_PROPS, &["shopping center", "shopping mall", "mall"]),
    t!("TouristInformationCenter", Some("LocalBusiness"), "Tourist information", NO_PROPS, &["tourist information", "visitor center"]),
    t!("TravelAgency", Some("LocalBusiness"), "Travel agency", NO_PROPS, &["travel agency", "travel agent", "tours", "tour operator"]),
    // Automotive
    t!("AutomotiveBusiness", Some("LocalBusiness"), "Automotive business", NO_PROPS, &["automotive", "car", "auto"]),
    t!("AutoBodyShop", Some("AutomotiveBusiness"), "Auto body shop", NO_PROPS, &["auto body", "body shop", "collision repair"]),
    t!("AutoDealer", Some("AutomotiveBusiness"), "Car dealership", NO_PROPS, &["car dealer", "auto dealer", "dealership", "used cars"]),
    t!("AutoPartsStore", Some("AutomotiveBusiness"), "Auto parts store", NO_PROPS, &["auto parts", "car parts"]),
    t!("AutoRental", Some("AutomotiveBusiness"), "Car rental", NO_PROPS, &["car rental", "rent a car", "auto rental"]),
    t!("AutoRepair", Some("AutomotiveBusiness"), "Auto repair shop", NO_PROPS, &["auto repair", "car repair", "mechanic", "garage"]),
    t!("AutoWash", Some("AutomotiveBusiness"), "Car wash", NO_PROPS, &["car wash", "auto detailing", "detailing"]),
    t!("GasStation", Some("AutomotiveBusiness"), "Gas station", NO_PROPS, &["gas station", "fuel", "petrol station"]),
    t!("MotorcycleDealer", Some("AutomotiveBusiness"), "Motorcycle dealer", NO_PROPS, &["motorcycle dealer", "motorcycles"]),
    t!("MotorcycleRepair", Some("AutomotiveBusiness"), "Motorcycle repair", NO_PROPS, &["motorcycle repair"]),
    // Entertainment
    t!("EntertainmentBusiness", Some("LocalBusiness"), "Entertainment venue", NO_PROPS, &["entertainment", "venue"]),
    t!("AmusementPark", Some("EntertainmentBusiness"), "Amusement park", NO_PROPS, &["amusement park", "theme park"]),
    t!("ArtGallery", Some("EntertainmentBusiness"), "Art gallery", NO_PROPS, &["art gallery", "gallery", "exhibition"]),
    t!("Casino", Some("EntertainmentBusiness"), "Casino", NO_PROPS, &["casino", "gambling"]),
    t!("ComedyClub", Some("EntertainmentBusiness"), "Comedy club", NO_PROPS, &["comedy club", "stand-up comedy"]),
    t!("MovieTheater", Some("EntertainmentBusiness"), "Movie theater", NO_PROPS, &["movie theater", "cinema"]),
    t!("NightClub", Some("EntertainmentBusiness"), "Night club", NO_PROPS, &["nightclub", "night club", "dance club"]),
    // Financial
    t!("FinancialService", Some("LocalBusiness"), "Financial service", NO_PROPS, &["financial", "finance", "financial advisor", "wealth management"]),
    t!("AccountingService", Some("FinancialService"), "Accounting service", NO_PROPS, &["accounting", "accountant", "bookkeeping", "tax preparation", "cpa"]),
    t!("BankOrCreditUnion", Some("FinancialService"), "Bank or credit union", NO_PROPS, &["bank", "credit union", "banking"]),
    t!("InsuranceAgency", Some("FinancialService"), "Insurance agency", NO_PROPS, &["insurance", "insurance agency", "insurance broker"]),
    // Food establishments
    t!("FoodEstablishment", Some("LocalBusiness"), "Place that serves food or drink", FOOD_ESTABLISHMENT_PROPS, &["food", "dining", "eatery"]),
    t!("Bakery", Some("FoodEstablishment"), "Bakery", NO_PROPS, &["bakery", "baked goods", "pastry shop", "patisserie"]),
    t!("BarOrPub", Some("FoodEstablishment"), "Bar or pub", NO_PROPS, &["bar", "pub", "tavern", "cocktail bar", "sports bar"]),
    t!("Brewery", Some("FoodEstablishment"), "Brewery or brewpub", NO_PROPS, &["brewery", "craft beer", "brewpub", "taproom", "microbrewery"]),
    t!("CafeOrCoffeeShop", Some("FoodEstablishment"), "Cafe or coffee shop", NO_PROPS, &["cafe", "coffee shop", "coffee house", "espresso bar", "coffee"]),
    t!("Distillery", Some("FoodEstablishment"), "Distillery", NO_PROPS, &["distillery", "whiskey", "spirits", "gin"]),
    t!("FastFoodRestaurant", Some("FoodEstablishment"), "Fast food restaurant", NO_PROPS, &["fast food", "takeaway", "drive-thru"]),
    t!("IceCreamShop", Some("FoodEstablishment"), "Ice cream shop", NO_PROPS, &["ice cream", "gelato", "frozen yogurt"]),
    t!("Restaurant", Some("FoodEstablishment"), "Restaurant", NO_PROPS, &["restaurant", "bistro", "diner", "grill", "pizzeria", "sushi"]),
    t!("Winery", Some("FoodEstablishment"), "Winery", NO_PROPS, &["winery", "vineyard", "wine tasting", "wine"]),
    // Government office
    t!("GovernmentOffice", Some("LocalBusiness"), "Government office", NO_PROPS, &["government office"]),
    t!("PostOffice", Some("GovernmentOffice"), "Post office", NO_PROPS, &["post office", "postal"]),
    // Health and beauty
    t!("HealthAndBeautyBusiness", Some("LocalBusiness"), "Health and beauty business", NO_PROPS, &["beauty", "wellness"]),
    t!("BeautySalon", Some("HealthAndBeautyBusiness"), "Beauty salon", NO_PROPS, &["beauty salon", "salon", "makeup", "esthetician"]),
    t!("DaySpa", Some("HealthAndBeautyBusiness"), "Day spa", NO_PROPS, &["spa", "day spa", "massage", "facial"]),
    t!("HairSalon", Some("HealthAndBeautyBusiness"), "Hair salon", NO_PROPS, &["hair salon", "hairdresser", "barber", "barbershop", "haircut"]),
    t!("NailSalon", Some("HealthAndBeautyBusiness"), "Nail salon", NO_PROPS, &["nail salon", "manicure", "pedicure", "nails"]),
    t!("TattooParlor", Some("HealthAndBeautyBusiness"), "Tattoo parlor", NO_PROPS, &["tattoo", "tattoo parlor", "piercing"]),
    // Home and construction
    t!("HomeAndConstructionBusiness", Some("LocalBusiness"), "Home and construction trade", NO_PROPS, &["construction", "contractor", "home improvement", "renovation"]),
    t!("Electrician", Some("HomeAndConstructionBusiness"), "Electrician", NO_PROPS, &["electrician", "electrical", "wiring"]),
    t!("GeneralContractor", Some("HomeAndConstructionBusiness"), "General contractor", NO_PROPS, &["general contractor", "builder", "remodeling"]),
    t!("HVACBusiness", Some("HomeAndConstructionBusiness"), "HVAC business", NO_PROPS, &["hvac", "heating", "air conditioning", "furnace"]),
    t!("HousePainter", Some("HomeAndConstructionBusiness"), "House painter", NO_PROPS, &["painter", "painting", "house painting"]),
    t!("Locksmith", Some("HomeAndConstructionBusiness"), "Locksmith", NO_PROPS, &["locksmith", "locks", "lockout"]),
    t!("MovingCompany", Some("HomeAndConstructionBusiness"), "Moving company", NO_PROPS, &["moving company", "movers", "relocation"]),
    t!("Plumber", Some("HomeAndConstructionBusiness"), "Plumber", NO_PROPS, &["plumber", "plumbing", "drain", "pipes"]),
    t!("RoofingContractor", Some("HomeAndConstructionBusiness"), "Roofing contractor", NO_PROPS, &["roofing", "roofer", "roof repair"]),
    // Legal
    t!("LegalService", Some("LocalBusiness"), "Legal service", NO_PROPS, &["legal", "law firm", "legal services", "paralegal"]),
    t!("Attorney", Some("LegalService"), "Attorney", NO_PROPS, &["attorney", "lawyer", "counsel", "litigation"]),
    t!("Notary", Some("LegalService"), "Notary", NO_PROPS, &["notary", "notary public"]),
    // Lodging
    t!("LodgingBusiness", Some("LocalBusiness"), "Lodging business", LODGING_PROPS, &["lodging", "accommodation", "stay"]),
    t!("BedAndBreakfast", Some("LodgingBusiness"), "Bed and breakfast", NO_PROPS, &["bed and breakfast", "b&b", "guesthouse"]),
    t!("Campground", Some("LodgingBusiness"), "Campground", NO_PROPS, &["campground", "camping", "rv park"]),
    t!("Hostel", Some("LodgingBusiness"), "Hostel", NO_PROPS, &["hostel", "backpackers"]),
    t!("Hotel", Some("LodgingBusiness"), "Hotel", NO_PROPS, &["hotel", "inn", "suites"]),
    t!("Motel", Some("LodgingBusiness"), "Motel", NO_PROPS, &["motel"]),
    t!("Resort", Some("LodgingBusiness"), "Resort", NO_PROPS, &["resort", "beach resort", "all-inclusive"]),
    // Medical
    t!("MedicalBusiness", Some("LocalBusiness"), "Medical business", MEDICAL_PROPS, &["medical", "clinic", "health"]),
    t!("Chiropractor", Some("MedicalBusiness"), "Chiropractor", NO_PROPS, &["chiropractor", "chiropractic"]),
    t!("Dentist", Some("MedicalBusiness"), "Dental practice", NO_PROPS, &["dentist", "dental", "orthodontist", "teeth"]),
    t!("MedicalClinic", Some("MedicalBusiness"), "Medical clinic", NO_PROPS, &["medical clinic", "urgent care", "walk-in clinic"]),
    t!("Optician", Some("MedicalBusiness"), "Optician", NO_PROPS, &["optician", "optometrist", "eye care", "glasses"]),
    t!("Pharmacy", Some("MedicalBusiness"), "Pharmacy", NO_PROPS, &["pharmacy", "drugstore", "chemist"]),
    t!("Physician", Some("MedicalBusiness"), "Physician practice", NO_PROPS, &["physician", "doctor", "family practice", "pediatrician"]),
    t!("PhysicalTherapy", Some("MedicalBusiness"), "Physical therapy", NO_PROPS, &["physical therapy", "physiotherapy", "rehab"]),
    t!("VeterinaryCare", Some("MedicalBusiness"), "Veterinary care", NO_PROPS, &["veterinary", "vet", "animal hospital", "pet clinic"]),
    // Sports and fitness
    t!("SportsActivityLocation", Some("LocalBusiness"), "Sports activity location", NO_PROPS, &["sports", "fitness", "athletics"]),
    t!("BowlingAlley", Some("SportsActivityLocation"), "Bowling alley", NO_PROPS, &["bowling", "bowling alley"]),
    t!("ExerciseGym", Some("SportsActivityLocation"), "Gym", NO_PROPS, &["gym", "fitness center", "crossfit", "personal training"]),
    t!("GolfCourse", Some("SportsActivityLocation"), "Golf course", NO_PROPS, &["golf", "golf course", "golf club"]),
    t!("HealthClub", Some("SportsActivityLocation"), "Health club", NO_PROPS, &["health club", "wellness center", "yoga studio", "pilates"]),
    t!("PublicSwimmingPool", Some("SportsActivityLocation"), "Swimming pool", NO_PROPS, &["swimming pool", "swim school", "aquatic center"]),
    t!("SkiResort", Some("SportsActivityLocation"), "Ski resort", NO_PROPS, &["ski resort", "skiing", "snowboard"]),
    t!("SportsClub", Some("SportsActivityLocation"), "Sports club", NO_PROPS, &["sports club", "martial arts", "boxing gym", "tennis club"]),
    t!("StadiumOrArena", Some("SportsActivityLocation"), "Stadium or arena", NO_PROPS, &["stadium", "arena"]),
    // Stores
    t!("Store", Some("LocalBusiness"), "Retail store", NO_PROPS, &["store", "retail", "boutique", "outlet"]),
    t!("BikeStore", Some("Store"), "Bike store", NO_PROPS, &["bike shop", "bicycle store", "bikes", "cycling"]),
    t!("BookStore", Some("Store"), "Book store", NO_PROPS, &["bookstore", "book shop", "books"]),
    t!("ClothingStore", Some("Store"), "Clothing store", NO_PROPS, &["clothing", "apparel", "fashion", "clothes"]),
    t!("ComputerStore", Some("Store"), "Computer store", NO_PROPS, &["computer store", "pc repair", "computers"]),
    t!("ConvenienceStore", Some("Store"), "Convenience store", NO_PROPS, &["convenience store", "corner store", "mini mart"]),
    t!("DepartmentStore", Some("Store"), "Department store", NO_PROPS, &["department store"]),
    t!("ElectronicsStore", Some("Store"), "Electronics store", NO_PROPS, &["electronics", "electronics store", "gadgets"]),
    t!("Florist", Some("Store"), "Florist", NO_PROPS, &["florist", "flowers", "flower shop", "bouquet"]),
    t!("FurnitureStore", Some("Store"), "Furniture store", NO_PROPS, &["furniture", "furniture store", "home furnishings"]),
    t!("GardenStore", Some("Store"), "Garden store", NO_PROPS, &["garden center", "nursery", "plants", "landscaping supplies"]),
    t!("GroceryStore", Some("Store"), "Grocery store", NO_PROPS, &["grocery", "supermarket", "groceries", "market"]),
    t!("HardwareStore", Some("Store"), "Hardware store", NO_PROPS, &["hardware store", "tools", "building supplies"]),
    t!("HobbyShop", Some("Store"), "Hobby shop", NO_PROPS, &["hobby shop", "crafts", "models", "games store"]),
    t!("JewelryStore", Some("Store"), "Jewelry store", NO_PROPS, &["jewelry", "jeweler", "rings", "watches"]),
    t!("LiquorStore", Some("Store"), "Liquor store", NO_PROPS, &["liquor store", "wine shop", "bottle shop"]),
    t!("MobilePhoneStore", Some("Store"), "Mobile phone store", NO_PROPS, &["phone store", "mobile phones", "cell phone repair"]),
    t!("MusicStore", Some("Store"), "Music store", NO_PROPS, &["music store", "instruments", "records", "vinyl"]),
    t!("OfficeEquipmentStore", Some("Store"), "Office equipment store", NO_PROPS, &["office supplies", "office equipment", "stationery"]),
    t!("PawnShop", Some("Store"), "Pawn shop", NO_PROPS, &["pawn shop", "pawnbroker"]),
    t!("PetStore", Some("Store"), "Pet store", NO_PROPS, &["pet store", "pet supplies", "pet grooming"]),
    t!("ShoeStore", Some("Store"), "Shoe store", NO_PROPS, &["shoes", "shoe store", "footwear", "sneakers"]),
    t!("SportingGoodsStore", Some("Store"), "Sporting goods store", NO_PROPS, &["sporting goods", "sports equipment", "outdoor gear"]),
    t!("TireShop", Some("Store"), "Tire shop", NO_PROPS, &["tires", "tire shop", "wheel alignment"]),
    t!("ToyStore", Some("Store"), "Toy store", NO_PROPS, &["toys", "toy store"]),
    t!("WholesaleStore", Some("Store"), "Wholesale store", NO_PROPS, &["wholesale", "warehouse store", "bulk"]),
];

/// Immutable registry over [`TYPE_DEFS`], keyed by type name.
pub struct TypeRegistry {
    by_name: HashMap<&'static str, &'static SchemaTypeDef>,
}

static REGISTRY: Lazy<TypeRegistry> = Lazy::new(|| {
    let mut by_name = HashMap::with_capacity(TYPE_DEFS.len());
    for def in TYPE_DEFS {
        by_name.insert(def.name, def);
    }
    TypeRegistry { by_name }
});

impl TypeRegistry {
    /// The shared registry, built on first use.
    pub fn global() -> &'static TypeRegistry {
        &REGISTRY
    }

    pub fn get(&self, name: &str) -> Option<&'static SchemaTypeDef> {
        self.by_name.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static SchemaTypeDef> + '_ {
        TYPE_DEFS.iter()
    }

    /// Number of parent hops from `name` to its root. A parent pointer that
    /// would revisit an already-seen node is treated as absent.
    pub fn depth(&self, name: &str) -> usize {
        let mut seen = HashSet::new();
        let mut depth = 0;
        let mut current = name;
        seen.insert(current);
        while let Some(parent) = self.get(current).and_then(|def| def.parent) {
            if !seen.insert(parent) {
                break;
            }
            depth += 1;
            current = parent;
        }
        depth
    }

    /// Whether `name` sits below `ancestor` in the forest (strictly; a type
    /// is not its own descendant).
    pub fn is_descendant_of(&self, name: &str, ancestor: &str) -> bool {
        let mut seen = HashSet::new();
        seen.insert(name);
        let mut current = name;
        while let Some(parent) = self.get(current).and_then(|def| def.parent) {
            if parent == ancestor {
                return true;
            }
            if !seen.insert(parent) {
                break;
            }
            current = parent;
        }
        false
    }

    /// Properties of a type merged with everything it inherits. Walks from
    /// the type toward the root; the first definition of each property name
    /// wins, so a child's property overrides its ancestors'.
    pub fn inherited_properties(&self, name: &str) -> Vec<&'static PropertyDef> {
        let mut seen_names = HashSet::new();
        let mut seen_types = HashSet::new();
        let mut out = Vec::new();
        let mut current = Some(name);
        while let Some(type_name) = current {
            if !seen_types.insert(type_name) {
                break;
            }
            let Some(def) = self.get(type_name) else { break };
            for prop in def.properties {
                if seen_names.insert(prop.name) {
                    out.push(prop);
                }
            }
            current = def.parent;
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_is_substantial() {
        assert!(TypeRegistry::global().len() >= 140);
    }

    #[test]
    fn every_parent_exists() {
        let registry = TypeRegistry::global();
        for def in registry.iter() {
            if let Some(parent) = def.parent {
                assert!(registry.contains(parent), "{} has unknown parent {parent}", def.name);
            }
        }
    }

    #[test]
    fn no_cycles_reachable_from_any_node() {
        let registry = TypeRegistry::global();
        for def in registry.iter() {
            // depth() breaks on revisits; with a healthy forest it must
            // terminate below the registry size.
            assert!(registry.depth(def.name) < registry.len());
        }
    }

    #[test]
    fn wildcard_only_on_default_type() {
        let registry = TypeRegistry::global();
        for def in registry.iter() {
            let has_wildcard = def.keywords.contains(&WILDCARD_KEYWORD);
            assert_eq!(
                has_wildcard,
                def.name == DEFAULT_TYPE,
                "wildcard keyword misplaced on {}",
                def.name
            );
        }
    }

    #[test]
    fn depth_counts_parent_hops() {
        let registry = TypeRegistry::global();
        assert_eq!(registry.depth("Thing"), 0);
        assert_eq!(registry.depth("Organization"), 1);
        assert_eq!(registry.depth("LocalBusiness"), 2);
        assert_eq!(registry.depth("FoodEstablishment"), 3);
        assert_eq!(registry.depth("Brewery"), 4);
    }

    #[test]
    fn descendant_checks() {
        let registry = TypeRegistry::global();
        assert!(registry.is_descendant_of("Brewery", "FoodEstablishment"));
        assert!(registry.is_descendant_of("Brewery", "Organization"));
        assert!(!registry.is_descendant_of("Brewery", "Store"));
        assert!(!registry.is_descendant_of("Brewery", "Brewery"));
    }

    #[test]
    fn inherited_properties_first_definition_wins() {
        let registry = TypeRegistry::global();
        let props = registry.inherited_properties("Restaurant");
        let names: Vec<&str> = props.iter().map(|p| p.name).collect();

        // From FoodEstablishment
        assert!(names.contains(&"servesCuisine"));
        // From LocalBusiness
        assert!(names.contains(&"address"));
        // From Thing
        assert!(names.contains(&"name"));

        // telephone is defined on both LocalBusiness and Organization; the
        // child's definition must win and appear exactly once.
        assert_eq!(names.iter().filter(|n| **n == "telephone").count(), 1);
        let telephone = props.iter().find(|p| p.name == "telephone").unwrap();
        assert!(!telephone.required);
    }

    #[test]
    fn required_properties_survive_inheritance() {
        let registry = TypeRegistry::global();
        let props = registry.inherited_properties("Brewery");
        let address = props.iter().find(|p| p.name == "address").unwrap();
        assert!(address.required);
        let name = props.iter().find(|p| p.name == "name").unwrap();
        assert!(name.required);
    }
}
