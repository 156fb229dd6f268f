//! Embedded prompt template and ad-sheet skeletons
//!
//! The skeletons are compiled into the binary and keyed by (platform,
//! template name) in the registry. Their `{placeholder}` slots are left
//! for the model to fill; nothing substitutes them locally. Texts are
//! Spanish because the generated sheets target Spanish-speaking buyers.

/// Instruction template rendered by the composer (Handlebars syntax)
pub const AD_SHEET_PROMPT: &str = r#"Eres un experto en marketing digital y ventas. Necesito que crees una ficha publicitaria en formato markdown para los siguientes productos:

```json
{{products_json}}
```

La ficha publicitaria será publicada en {{platform}}.
Usa el siguiente template como guía, pero puedes mejorarlo según las mejores prácticas de {{platform}}:

```
{{skeleton}}
```

Por favor, crea una ficha atractiva, persuasiva y optimizada para la plataforma {{platform}}.
Si la ficha es para varios productos, agrúpalos de forma coherente.
Incluye emoji adecuados para hacerla atractiva.
No incluyas URLs de imágenes falsas, solo referencias a las fotos mencionadas en los datos.
Recuerda que el formato final debe ser markdown plano."#;

/// Facebook feed post, compact
pub const FACEBOOK_BASIC: &str = r#"
# 🛍️ {product_name}

📌 **Precio**: ${product_price}
{product_details}

✨ *¡Disponible ahora! Contáctanos para más información.*
"#;

/// Facebook feed post with image slot and benefit section
pub const FACEBOOK_DETAILED: &str = r#"
# 🔥 OFERTA ESPECIAL 🔥

## {product_name}

![Imagen del producto]({product_image_url})

### Detalles:
- 💰 **Precio**: ${product_price}
{product_details}

### ¿Por qué elegir este producto?
{product_benefits}

📞 *¡Contáctanos ahora y no pierdas esta oportunidad!*
"#;

/// WhatsApp broadcast message, compact
pub const WHATSAPP_BASIC: &str = r#"
*{product_name}*
💰 Precio: ${product_price}
{product_details}

✅ ¡Disponible para entrega inmediata!
🔄 Responde a este mensaje para más información
"#;

/// WhatsApp broadcast message with highlighted features
pub const WHATSAPP_DETAILED: &str = r#"
*🌟 NUEVO PRODUCTO 🌟*

*{product_name}*

💰 *Precio:* ${product_price}
{product_details}

📋 *Características destacadas:*
{product_benefits}

🚚 Entrega disponible
💳 Múltiples métodos de pago

_¡Pregunta por disponibilidad y más detalles!_
"#;

/// Revolico classified listing, compact
pub const REVOLICO_BASIC: &str = r#"
# {product_name}

Precio: ${product_price}
{product_details}

Contacto: [NÚMERO]
"#;

/// Revolico classified listing with specification section
pub const REVOLICO_DETAILED: &str = r#"
# {product_name} - ${product_price}

![Imagen]({product_image_url})

## Descripción:
{product_details}

## Especificaciones:
{product_specifications}

## Detalles de contacto:
- Teléfono: [NÚMERO]
- Disponibilidad: [HORARIO]
- Ubicación: [LOCALIDAD]

_Se aceptan pagos en efectivo y transferencia._
"#;
