//! Canned text pools for posts and comments.

use crate::provider::FakeDataProvider;

/// Review texts used as post content.
pub const REVIEW_TEXTS: &[&str] = &[
    "¡Increíble experiencia! La comida estaba deliciosa y el servicio excelente.",
    "Los tacos al pastor son los mejores que he probado en la ciudad.",
    "Buen lugar para ir con amigos, el ambiente es muy agradable.",
    "La pasta estaba en su punto y la salsa tenía un sabor casero.",
    "Precios justos y porciones generosas. Volveré pronto.",
    "El sushi estaba fresquísimo, se nota la calidad del pescado.",
    "Tuvimos que esperar un poco, pero valió totalmente la pena.",
    "Los postres son espectaculares, no te vayas sin probar el flan.",
    "Un clásico del barrio que nunca decepciona.",
    "La hamburguesa estaba jugosa y las papas bien crujientes.",
    "Me encantó la terraza, perfecta para una comida tranquila.",
    "El ramen tiene un caldo profundo y lleno de sabor.",
    "Servicio rápido y amable, ideal para la hora de la comida.",
    "Probé el menú de degustación y cada plato fue una sorpresa.",
    "Buena opción vegetariana, con ingredientes frescos y de temporada.",
];

/// Texts used as comment content.
pub const COMMENT_TEXTS: &[&str] = &[
    "¡Se ve delicioso!",
    "Tengo que ir a probarlo.",
    "Totalmente de acuerdo, es de mis favoritos.",
    "¿Qué me recomiendas pedir?",
    "Gracias por la recomendación.",
    "Yo fui la semana pasada y me encantó.",
    "¿Aceptan reservaciones?",
    "Ese platillo se ve increíble.",
    "Ya lo agregué a mi lista.",
    "¿Qué tal están los precios?",
];

/// Draws one entry from a text pool, or an empty string from an empty pool.
pub(crate) fn pick_text(provider: &mut dyn FakeDataProvider, pool: &[&str]) -> String {
    provider
        .pick_index(pool.len())
        .and_then(|index| pool.get(index))
        .map_or_else(String::new, |text| (*text).to_owned())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::provider::FakerProvider;

    #[rstest]
    #[case(REVIEW_TEXTS)]
    #[case(COMMENT_TEXTS)]
    fn pools_hold_non_blank_entries(#[case] pool: &[&str]) {
        assert!(!pool.is_empty());
        assert!(pool.iter().all(|text| !text.trim().is_empty()));
    }

    #[rstest]
    fn picks_come_from_the_pool() {
        let mut provider = FakerProvider::from_seed(1);
        for _ in 0..30 {
            let text = pick_text(&mut provider, REVIEW_TEXTS);
            assert!(REVIEW_TEXTS.contains(&text.as_str()));
        }
    }

    #[rstest]
    fn empty_pool_yields_empty_text() {
        let mut provider = FakerProvider::from_seed(1);
        assert_eq!(pick_text(&mut provider, &[]), "");
    }
}
