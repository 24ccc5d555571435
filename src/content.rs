//! Localized content table
//!
//! Static page copy for each supported language. Lookups are total: every
//! language has a complete bundle, and an offering tag missing from the
//! table resolves to an empty label instead of failing.

use crate::i18n::Language;

/// Copy for the restaurant list page
#[derive(Debug)]
pub struct ListContent {
    pub title: &'static str,
    pub offers_label: &'static str,
    pub places_label: &'static str,
    pub delivery: &'static str,
    pub staff_pick: &'static str,
    /// Call-to-action button text
    pub order_label: &'static str,
    /// Tag -> label, for both offering and place tags
    offers: &'static [(&'static str, &'static str)],
}

impl ListContent {
    /// Localized label for an offering or place tag, empty when unknown
    pub fn offer_label(&self, tag: &str) -> &'static str {
        self.offers
            .iter()
            .find(|(key, _)| *key == tag)
            .map(|(_, label)| *label)
            .unwrap_or("")
    }

    /// Whether the table carries a label for `tag`
    pub fn knows_tag(&self, tag: &str) -> bool {
        self.offers.iter().any(|(key, _)| *key == tag)
    }
}

/// Copy for the navigation bar
#[derive(Debug)]
pub struct NavContent {
    pub site_name: &'static str,
    pub restaurants: &'static str,
    pub map: &'static str,
    pub list: &'static str,
    pub about: &'static str,
    pub for_restaurants: &'static str,
    pub resources: &'static str,
    pub submit: &'static str,
}

/// Copy for the about page
#[derive(Debug)]
pub struct AboutContent {
    pub title: &'static str,
    pub paragraphs: &'static [&'static str],
}

/// Everything a page needs for one language
#[derive(Debug)]
pub struct ContentBundle {
    pub list: ListContent,
    pub nav: NavContent,
    pub about: AboutContent,
}

static PORTUGUESE: ContentBundle = ContentBundle {
    list: ListContent {
        title: "Restaurantes",
        offers_label: "Ofertas",
        places_label: "Locais",
        delivery: "Com Entrega",
        staff_pick: "Destaque",
        order_label: "Encomendar",
        offers: &[
            ("Food", "Comida"),
            ("Wine", "Vinho"),
            ("Beer", "Cerveja"),
            ("Drinks", "Bebidas"),
            ("Vouchers", "Vouchers"),
            ("Lisboa", "Lisboa"),
            ("Porto", "Porto"),
            ("Coimbra", "Coimbra"),
            ("Aveiro", "Aveiro"),
            ("Evora", "Évora"),
            ("Leiria", "Leiria"),
        ],
    },
    nav: NavContent {
        site_name: "Jantarada",
        restaurants: "Restaurantes",
        map: "Mapa",
        list: "Lista",
        about: "Sobre",
        for_restaurants: "Para restaurantes",
        resources: "Recursos",
        submit: "Submeter",
    },
    about: AboutContent {
        title: "Sobre",
        paragraphs: &[
            "Os restaurantes do seu bairro estão a sofrer com a crise atual, mas continuam a cozinhar! \
             Ajude-os a sobreviver encomendando take away dos melhores restaurantes.",
            "Contacte-nos em",
        ],
    },
};

static ENGLISH: ContentBundle = ContentBundle {
    list: ListContent {
        title: "Restaurants",
        offers_label: "Offers",
        places_label: "Places",
        delivery: "Delivery",
        staff_pick: "Staff Pick",
        order_label: "View and order",
        offers: &[
            ("Food", "Food"),
            ("Wine", "Wine"),
            ("Beer", "Beer"),
            ("Drinks", "Drinks"),
            ("Vouchers", "Giftcards"),
            ("Lisboa", "Lisboa"),
            ("Porto", "Porto"),
            ("Coimbra", "Coimbra"),
            ("Aveiro", "Aveiro"),
            ("Evora", "Évora"),
            ("Leiria", "Leiria"),
        ],
    },
    nav: NavContent {
        site_name: "Jantarada",
        restaurants: "Restaurants",
        map: "Map view",
        list: "List view",
        about: "About",
        for_restaurants: "For restaurants",
        resources: "Resources",
        submit: "Submit",
    },
    about: AboutContent {
        title: "About",
        paragraphs: &[
            "Your local restaurants are hurt by the current crisis, but they're still cooking! \
             Help them stay alive by getting take away from the best restaurants.",
            "Contact us at",
        ],
    },
};

/// Content bundle for a language
pub fn content(language: Language) -> &'static ContentBundle {
    match language {
        Language::Portuguese => &PORTUGUESE,
        Language::English => &ENGLISH,
    }
}
