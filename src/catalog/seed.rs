//! Seed dataset loaded when durable storage holds no book list.

use chrono::NaiveDate;

use super::models::Book;

#[allow(clippy::too_many_arguments)]
fn book(
    id: &str,
    title: &str,
    author: &str,
    description: &str,
    cover_url: &str,
    pdf_url: &str,
    category: &str,
    subcategory: &str,
    upload_date: NaiveDate,
    pages: u32,
) -> Book {
    Book {
        id: id.to_string(),
        title: title.to_string(),
        author: author.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        subcategory: subcategory.to_string(),
        cover_url: cover_url.to_string(),
        cover_data: None,
        pdf_url: pdf_url.to_string(),
        pdf_data: None,
        upload_date,
        pages: Some(pages),
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
}

/// Ten example records spanning both categories.
pub fn seed_books() -> Vec<Book> {
    vec![
        book(
            "1",
            "El Quijote",
            "Miguel de Cervantes",
            "La historia del ingenioso hidalgo Don Quijote de la Mancha",
            "https://images.unsplash.com/photo-1544716278-ca5e3f4abd8c?w=300&h=400&fit=crop",
            "/mock-pdfs/quijote.pdf",
            "Literatura General",
            "Clásicos",
            date(2024, 1, 15),
            863,
        ),
        book(
            "2",
            "Cien Años de Soledad",
            "Gabriel García Márquez",
            "La saga de la familia Buendía en el pueblo ficticio de Macondo",
            "https://images.unsplash.com/photo-1512820790803-83ca734da794?w=300&h=400&fit=crop",
            "/mock-pdfs/cien-anos.pdf",
            "Literatura General",
            "Literatura Latinoamericana",
            date(2024, 1, 10),
            417,
        ),
        book(
            "3",
            "La Casa de los Espíritus",
            "Isabel Allende",
            "Una saga familiar que abarca varias generaciones",
            "https://images.unsplash.com/photo-1481627834876-b7833e8f5570?w=300&h=400&fit=crop",
            "/mock-pdfs/casa-espiritus.pdf",
            "Literatura General",
            "Literatura Latinoamericana",
            date(2024, 1, 5),
            433,
        ),
        book(
            "4",
            "Pedro Páramo",
            "Juan Rulfo",
            "Juan Preciado viaja a Comala en busca de su padre",
            "https://images.unsplash.com/photo-1476275466078-4007374efbbe?w=300&h=400&fit=crop",
            "/mock-pdfs/pedro-paramo.pdf",
            "Literatura General",
            "Literatura Latinoamericana",
            date(2024, 1, 20),
            128,
        ),
        book(
            "5",
            "Matemáticas Divertidas",
            "Prof. Ana Martínez",
            "Aprende matemáticas básicas con ejercicios y juegos",
            "https://images.unsplash.com/photo-1606092195730-5d7b9af1efc5?w=300&h=400&fit=crop",
            "/mock-pdfs/matematicas-1.pdf",
            "Educación Primaria",
            "Matemáticas",
            date(2024, 2, 1),
            120,
        ),
        book(
            "6",
            "Números y Operaciones",
            "Dr. Carlos Ruiz",
            "Suma, resta, multiplicación y división",
            "https://images.unsplash.com/photo-1635070041078-e363dbe005cb?w=300&h=400&fit=crop",
            "/mock-pdfs/numeros-operaciones.pdf",
            "Educación Primaria",
            "Matemáticas",
            date(2024, 2, 5),
            95,
        ),
        book(
            "7",
            "Mi Primer Libro de Ciencias",
            "Dra. María López",
            "Experimentos simples y conceptos básicos de ciencias naturales",
            "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=300&h=400&fit=crop",
            "/mock-pdfs/ciencias-primaria.pdf",
            "Educación Primaria",
            "Ciencias",
            date(2024, 2, 10),
            80,
        ),
        book(
            "8",
            "El Mundo que nos Rodea",
            "Prof. Juan Fernández",
            "Descubre la naturaleza, los animales y el medio ambiente",
            "https://images.unsplash.com/photo-1559827260-dc66d52bef19?w=300&h=400&fit=crop",
            "/mock-pdfs/mundo-naturaleza.pdf",
            "Educación Primaria",
            "Ciencias",
            date(2024, 2, 12),
            110,
        ),
        book(
            "9",
            "Aprendiendo a Leer y Escribir",
            "Lic. Carmen Silva",
            "Métodos y ejercicios para desarrollar la lectoescritura",
            "https://images.unsplash.com/photo-1456513080510-7bf3a84b82f8?w=300&h=400&fit=crop",
            "/mock-pdfs/lectoescritura.pdf",
            "Educación Primaria",
            "Lenguaje",
            date(2024, 2, 15),
            150,
        ),
        book(
            "10",
            "Cuaderno de Actividades",
            "Equipo Editorial Educativo",
            "Ejercicios, juegos y actividades para reforzar el aprendizaje",
            "https://images.unsplash.com/photo-1434056886845-dac89ffe9b56?w=300&h=400&fit=crop",
            "/mock-pdfs/actividades.pdf",
            "Educación Primaria",
            "Actividades",
            date(2024, 3, 1),
            100,
        ),
    ]
}
