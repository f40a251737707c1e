use web_sys as web;

pub struct Photo {
    pub src: &'static str,
    pub alt: &'static str,
    /// Inline placement for the absolutely positioned frame.
    pub style: &'static str,
}

pub const PHOTOS: [Photo; 6] = [
    Photo {
        src: "photos/1.jpg",
        alt: "Photo 1",
        style: "top:8%;left:6%;transform:rotate(-6deg)",
    },
    Photo {
        src: "photos/2.jpg",
        alt: "Photo 2",
        style: "top:12%;right:7%;transform:rotate(7deg)",
    },
    Photo {
        src: "photos/3.jpg",
        alt: "Photo 3",
        style: "bottom:10%;left:10%;transform:rotate(5deg)",
    },
    Photo {
        src: "photos/4.jpg",
        alt: "Photo 4",
        style: "bottom:14%;right:9%;transform:rotate(-7deg)",
    },
    Photo {
        src: "photos/5.jpg",
        alt: "Photo 5",
        style: "top:42%;left:2%;transform:rotate(10deg)",
    },
    Photo {
        src: "photos/6.jpg",
        alt: "Photo 6",
        style: "top:46%;right:2%;transform:rotate(-10deg)",
    },
];

/// Append the photo frames to `#collage`. Missing container is not fatal.
pub fn mount(document: &web::Document) -> anyhow::Result<()> {
    let Some(container) = document.get_element_by_id("collage") else {
        log::warn!("[collage] missing #collage; skipping photos");
        return Ok(());
    };
    let js_err = |e: wasm_bindgen::JsValue| anyhow::anyhow!("{:?}", e);
    for photo in &PHOTOS {
        let frame = document.create_element("div").map_err(js_err)?;
        frame.set_class_name("photo");
        frame.set_attribute("style", photo.style).map_err(js_err)?;
        let img = document.create_element("img").map_err(js_err)?;
        img.set_attribute("src", photo.src).map_err(js_err)?;
        img.set_attribute("alt", photo.alt).map_err(js_err)?;
        img.set_attribute("draggable", "false").map_err(js_err)?;
        frame.append_child(&img).map_err(js_err)?;
        container.append_child(&frame).map_err(js_err)?;
    }
    Ok(())
}
