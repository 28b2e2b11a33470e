//! Translation Lookup
//!
//! Flat key lookup into per-language dictionaries. A missing key falls back
//! to the key itself; German and Italian fall back to the English table.

use crate::models::Language;

type Dict = &'static [(&'static str, &'static str)];

static EN: Dict = &[
    ("sidebar.back", "Back"),
    ("sidebar.rotate", "Rotate"),
    ("sidebar.delete", "Delete"),
    ("sidebar.addPedal", "Add a pedal"),
    ("sidebar.searchPedal", "Search a pedal"),
    ("sidebar.addBoard", "Add a board"),
    ("sidebar.searchBoard", "Search a board"),
    ("sidebar.buyOnline", "Buy online"),
    ("sidebar.shop", "Shop"),
    ("sidebar.clearBoard", "Clear board"),
    ("sidebar.clearConfirm", "Clear the entire board?"),
    ("sidebar.loading", "Loading library..."),
    ("pedal.status", "Status"),
    ("pedal.type", "Type"),
    ("pedal.circuit", "Circuit"),
    ("pedal.bypass", "Bypass"),
    ("pedal.power", "Power"),
    ("pedal.draw", "Draw"),
    ("pedal.dimensions", "Dimensions"),
    ("pedal.weight", "Weight"),
    ("pedal.origin", "Origin"),
    ("pedal.manual", "Manual"),
    ("board.status", "Status"),
    ("board.material", "Material"),
    ("board.profile", "Profile"),
    ("board.dimensions", "Dimensions"),
    ("board.weight", "Weight"),
    ("board.origin", "Origin"),
    ("custom.title", "Make your own"),
    ("custom.name", "Name"),
    ("custom.width", "Width"),
    ("custom.depth", "Depth"),
    ("custom.add", "Add"),
    ("custom.pedal", "Pedal"),
    ("custom.board", "Board"),
    ("settings.title", "Settings"),
    ("settings.language", "Language"),
    ("settings.units", "Units"),
    ("canvas.totalDraw", "Total draw"),
    ("canvas.totalWeight", "Total weight"),
    ("search.noPedals", "No pedals found"),
    ("search.noBoards", "No boards found"),
    ("language.en", "English"),
    ("language.fr", "Français"),
    ("language.es", "Español"),
    ("language.de", "Deutsch"),
    ("language.it", "Italiano"),
];

static FR: Dict = &[
    ("sidebar.back", "Retour"),
    ("sidebar.rotate", "Pivoter"),
    ("sidebar.delete", "Supprimer"),
    ("sidebar.addPedal", "Ajouter une pédale"),
    ("sidebar.searchPedal", "Chercher une pédale"),
    ("sidebar.addBoard", "Ajouter un board"),
    ("sidebar.searchBoard", "Chercher un board"),
    ("sidebar.buyOnline", "Acheter en ligne"),
    ("sidebar.shop", "Boutique"),
    ("sidebar.clearBoard", "Vider le board"),
    ("sidebar.clearConfirm", "Vider tout le board ?"),
    ("sidebar.loading", "Chargement..."),
    ("pedal.status", "Statut"),
    ("pedal.type", "Type"),
    ("pedal.circuit", "Circuit"),
    ("pedal.bypass", "Bypass"),
    ("pedal.power", "Alimentation"),
    ("pedal.draw", "Consommation"),
    ("pedal.dimensions", "Dimensions"),
    ("pedal.weight", "Poids"),
    ("pedal.origin", "Origine"),
    ("pedal.manual", "Manuel"),
    ("board.status", "Statut"),
    ("board.material", "Matériau"),
    ("board.profile", "Profil"),
    ("board.dimensions", "Dimensions"),
    ("board.weight", "Poids"),
    ("board.origin", "Origine"),
    ("custom.title", "Créer le vôtre"),
    ("custom.name", "Nom"),
    ("custom.width", "Largeur"),
    ("custom.depth", "Profondeur"),
    ("custom.add", "Ajouter"),
    ("custom.pedal", "Pédale"),
    ("custom.board", "Board"),
    ("settings.title", "Réglages"),
    ("settings.language", "Langue"),
    ("settings.units", "Unités"),
    ("canvas.totalDraw", "Conso totale"),
    ("canvas.totalWeight", "Poids total"),
    ("search.noPedals", "Aucune pédale trouvée"),
    ("search.noBoards", "Aucun board trouvé"),
    ("language.en", "English"),
    ("language.fr", "Français"),
    ("language.es", "Español"),
    ("language.de", "Deutsch"),
    ("language.it", "Italiano"),
];

static ES: Dict = &[
    ("sidebar.back", "Volver"),
    ("sidebar.rotate", "Girar"),
    ("sidebar.delete", "Eliminar"),
    ("sidebar.addPedal", "Añadir un pedal"),
    ("sidebar.searchPedal", "Buscar un pedal"),
    ("sidebar.addBoard", "Añadir una pedalera"),
    ("sidebar.searchBoard", "Buscar una pedalera"),
    ("sidebar.buyOnline", "Comprar en línea"),
    ("sidebar.shop", "Tienda"),
    ("sidebar.clearBoard", "Vaciar la pedalera"),
    ("sidebar.clearConfirm", "¿Vaciar toda la pedalera?"),
    ("sidebar.loading", "Cargando..."),
    ("pedal.status", "Estado"),
    ("pedal.type", "Tipo"),
    ("pedal.circuit", "Circuito"),
    ("pedal.bypass", "Bypass"),
    ("pedal.power", "Alimentación"),
    ("pedal.draw", "Consumo"),
    ("pedal.dimensions", "Dimensiones"),
    ("pedal.weight", "Peso"),
    ("pedal.origin", "Origen"),
    ("pedal.manual", "Manual"),
    ("board.status", "Estado"),
    ("board.material", "Material"),
    ("board.profile", "Perfil"),
    ("board.dimensions", "Dimensiones"),
    ("board.weight", "Peso"),
    ("board.origin", "Origen"),
    ("custom.title", "Crea el tuyo"),
    ("custom.name", "Nombre"),
    ("custom.width", "Anchura"),
    ("custom.depth", "Profundidad"),
    ("custom.add", "Añadir"),
    ("custom.pedal", "Pedal"),
    ("custom.board", "Pedalera"),
    ("settings.title", "Ajustes"),
    ("settings.language", "Idioma"),
    ("settings.units", "Unidades"),
    ("canvas.totalDraw", "Consumo total"),
    ("canvas.totalWeight", "Peso total"),
    ("search.noPedals", "No se encontraron pedales"),
    ("search.noBoards", "No se encontraron pedaleras"),
    ("language.en", "English"),
    ("language.fr", "Français"),
    ("language.es", "Español"),
    ("language.de", "Deutsch"),
    ("language.it", "Italiano"),
];

fn dict(lang: Language) -> Dict {
    match lang {
        Language::En | Language::De | Language::It => EN,
        Language::Fr => FR,
        Language::Es => ES,
    }
}

/// Look up `key` in the dictionary for `lang`, falling back to the key.
pub fn translate<'a>(lang: Language, key: &'a str) -> &'a str {
    dict(lang)
        .iter()
        .find(|(k, _)| *k == key)
        .map_or(key, |(_, v)| *v)
}
