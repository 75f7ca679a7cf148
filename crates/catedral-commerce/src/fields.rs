//! Playing fields run by the store.

use crate::error::CommerceError;
use crate::ids::FieldId;
use serde::Serialize;

/// An airsoft playing field.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub struct Field {
    /// Unique field identifier.
    pub id: FieldId,
    /// Field name, as used in inquiry messages.
    pub name: &'static str,
    /// City the field is in.
    pub location: &'static str,
    /// Description shown on the fields screen.
    pub description: &'static str,
    /// Promotional video asset.
    pub video: &'static str,
}

static FIELDS: [Field; 3] = [
    Field {
        id: FieldId::new(1),
        name: "LA FÁBRICA",
        location: "Belo Horizonte",
        description: "Explore a essência do combate de curta distância no Campo La Fábrica, nossa sede localizada no bairro Planalto, Belo Horizonte. Este campo oferece uma experiência única em CQB, repleto de obstáculos estratégicos, como ônibus e carros abandonados, barricadas e construções destruídas. Este é o local perfeito para operadores que buscam adrenalina em um ambiente desafiador.",
        video: "assets/videos/la_fabrica.mp4",
    },
    Field {
        id: FieldId::new(2),
        name: "LA CLÍNICA",
        location: "Vespasiano",
        description: "Em Vespasiano, mergulhe na atmosfera intrigante do Campo La Clínica. Uma enorme clínica psiquiátrica abandonada aguarda, com quatro prédios de até quatro andares cada. Com corredores amplos, salas escuras e uma porção de mata, este campo proporciona jogos envolventes com objetivos e missões, oferecendo uma experiência de airsoft única.",
        video: "assets/videos/la_clinica.mp4",
    },
    Field {
        id: FieldId::new(3),
        name: "LA VILLA",
        location: "Pedro Leopoldo",
        description: "Descubra o charme abandonado do Campo La Villa, localizado em Pedro Leopoldo. Nesta vila deserta, explore casas abandonadas, obstáculos e muito mato, proporcionando um ambiente diversificado para suas operações. Este campo é perfeito para aqueles que buscam um cenário mais rústico e cheio de mistério.",
        video: "assets/videos/la_villa.mp4",
    },
];

/// The store's fields, in display order.
pub fn reference() -> &'static [Field] {
    &FIELDS
}

/// Look up a field by id.
pub fn find(id: FieldId) -> Result<&'static Field, CommerceError> {
    FIELDS
        .iter()
        .find(|f| f.id == id)
        .ok_or_else(|| CommerceError::FieldNotFound(id.to_string()))
}
